//! # anirec Recommend
//!
//! The query side of the anirec recommender. Given the immutable
//! (table, matrix) snapshot from `anirec-features`, this crate resolves a
//! user-supplied title (exact first, fuzzy fallback) and ranks every other
//! record by cosine similarity.
//!
//! Both operations are pure functions of their inputs: nothing in the
//! snapshot is mutated, so concurrent queries can share it freely.
//!
//! ## Example
//!
//! ```rust,no_run
//! use anirec_features::load_and_process;
//! use anirec_recommend::{recommend, Recommendation};
//!
//! let (table, matrix) = load_and_process("anime.csv")?;
//! match recommend("steins gate", &table, &matrix, 5) {
//!     Recommendation::Ranked(entries) => {
//!         for entry in entries {
//!             println!("{} ({:.3})", entry.name, entry.similarity);
//!         }
//!     }
//!     Recommendation::NotFound { query } => println!("{query} was not found"),
//! }
//! # Ok::<(), anirec_core::Error>(())
//! ```

pub mod fuzzy;
pub mod recommend;

pub use fuzzy::{find_closest_titles, DEFAULT_CUTOFF, DEFAULT_SUGGESTIONS};
pub use recommend::{recommend, resolve_title, RankedEntry, Recommendation};
