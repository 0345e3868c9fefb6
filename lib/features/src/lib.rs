//! # anirec Features
//!
//! The feature builder for the anirec recommender: turns raw tabular records
//! into the immutable (table, matrix) snapshot the recommender queries.
//!
//! The pipeline, in order:
//!
//! 1. HTML-entity decoding of text fields
//! 2. Numeric coercion of `episodes`/`rating` (failures become missing)
//! 3. Dropping records without a `type`, then re-indexing from 0
//! 4. Median imputation of the numeric columns over the filtered table
//! 5. Z-score normalization (zero-variance columns stay all-zero)
//! 6. One-hot `type` and multi-hot genre encoding over sorted vocabularies
//!
//! ## Example
//!
//! ```rust,no_run
//! use anirec_features::load_and_process;
//!
//! let (table, matrix) = load_and_process("anime.csv")?;
//! assert_eq!(matrix.nrows(), table.len());
//! # Ok::<(), anirec_core::Error>(())
//! ```

mod clean;

pub mod build;
pub mod cache;
pub mod encode;
pub mod load;
pub mod scale;

pub use build::build;
pub use cache::{Snapshot, SnapshotCache};
pub use encode::VocabEncoder;
pub use load::{load_and_process, load_csv, REQUIRED_COLUMNS};
pub use scale::StandardScaler;
