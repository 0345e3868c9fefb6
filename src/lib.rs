//! # anirec
//!
//! A content-based anime recommender: a one-shot feature-engineering pipeline
//! over a tabular dataset, followed by cosine-similarity nearest-neighbor
//! lookup with fuzzy title resolution.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anirec::prelude::*;
//!
//! // Build the immutable (table, matrix) snapshot once per data load.
//! let (table, matrix) = load_and_process("anime.csv")?;
//!
//! // Query it as often as needed; nothing is mutated.
//! match recommend("steins gate", &table, &matrix, 5) {
//!     Recommendation::Ranked(entries) => {
//!         for entry in entries {
//!             println!("{} ({:.3})", entry.name, entry.similarity);
//!         }
//!     }
//!     Recommendation::NotFound { query } => {
//!         let suggestions =
//!             find_closest_titles(&query, table.names(), DEFAULT_SUGGESTIONS, DEFAULT_CUTOFF);
//!         println!("{query} was not found. Did you mean {suggestions:?}?");
//!     }
//! }
//! # Ok::<(), anirec_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! anirec is composed of several crates:
//!
//! - [`anirec-core`](https://docs.rs/anirec-core) - Record table, feature matrix, cosine similarity
//! - [`anirec-features`](https://docs.rs/anirec-features) - Cleaning, imputation, scaling, encoding
//! - [`anirec-recommend`](https://docs.rs/anirec-recommend) - Title resolution and ranking

// Re-export core types
pub use anirec_core::{
    cosine_similarity, Error, FeatureMatrix, RawRecord, Record, RecordTable, Result,
};

// Re-export the feature builder
pub use anirec_features::{
    build, load_and_process, load_csv, Snapshot, SnapshotCache, StandardScaler, VocabEncoder,
    REQUIRED_COLUMNS,
};

// Re-export the recommender
pub use anirec_recommend::{
    find_closest_titles, recommend, resolve_title, RankedEntry, Recommendation, DEFAULT_CUTOFF,
    DEFAULT_SUGGESTIONS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build, cosine_similarity, find_closest_titles, load_and_process, load_csv, recommend,
        resolve_title, Error, FeatureMatrix, RankedEntry, RawRecord, Recommendation, Record,
        RecordTable, Result, Snapshot, SnapshotCache, StandardScaler, VocabEncoder,
        DEFAULT_CUTOFF, DEFAULT_SUGGESTIONS, REQUIRED_COLUMNS,
    };
}
