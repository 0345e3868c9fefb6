//! # anirec Core
//!
//! Core library for the anirec content-based recommender.
//!
//! This crate provides the fundamental data structures shared by the feature
//! builder and the recommender:
//!
//! - [`RawRecord`] - A source row before cleaning, all fields optional
//! - [`Record`] / [`RecordTable`] - Cleaned records with stable indices
//! - [`FeatureMatrix`] - Dense feature rows aligned 1:1 with the table
//!
//! The (table, matrix) pair is built once per data load and treated as an
//! immutable snapshot: row `i` of the matrix always describes record `i` of
//! the table.

pub mod error;
pub mod matrix;
pub mod record;

pub use error::{Error, Result};
pub use matrix::{cosine_similarity, FeatureMatrix};
pub use record::{RawRecord, Record, RecordTable};
