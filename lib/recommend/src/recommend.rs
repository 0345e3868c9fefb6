//! Title resolution and cosine-similarity ranking over one snapshot.

use anirec_core::{FeatureMatrix, RecordTable};
use serde::Serialize;
use tracing::debug;

use crate::fuzzy::find_closest_titles;

/// How many fuzzy candidates to consider when resolving a query title.
const RESOLUTION_CANDIDATES: usize = 3;

/// Minimum ratio for a fuzzy candidate to count as a resolution.
const RESOLUTION_CUTOFF: f64 = 0.5;

/// Sentinel forced onto the query row so it can never rank as its own
/// neighbor, whatever the numeric ties.
const SELF_SENTINEL: f32 = -1.0;

/// One recommended item with its similarity to the query item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub genres: Vec<String>,
    pub kind: String,
    pub episodes: f32,
    pub rating: f32,
    pub similarity: f32,
}

/// Outcome of a recommendation query.
///
/// `NotFound` is a normal result, not an error: callers must branch on it
/// distinctly from an empty ranked list, and it carries the original query
/// string for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Recommendation {
    Ranked(Vec<RankedEntry>),
    NotFound { query: String },
}

impl Recommendation {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Recommendation::NotFound { .. })
    }

    /// The ranked entries, if the query resolved.
    pub fn entries(&self) -> Option<&[RankedEntry]> {
        match self {
            Recommendation::Ranked(entries) => Some(entries),
            Recommendation::NotFound { .. } => None,
        }
    }
}

/// Resolve a query title to a table row: case-insensitive exact match first
/// (earliest row wins), then the best fuzzy candidate at or above the
/// resolution cutoff.
pub fn resolve_title(query: &str, table: &RecordTable) -> Option<usize> {
    if let Some(idx) = table.find_exact(query) {
        debug!(query, idx, "resolved title exactly");
        return Some(idx);
    }

    let candidates =
        find_closest_titles(query, table.names(), RESOLUTION_CANDIDATES, RESOLUTION_CUTOFF);
    let best = candidates.first()?;
    let idx = table.find_exact(best)?;
    debug!(query, resolved = %best, idx, "resolved title fuzzily");
    Some(idx)
}

/// Recommend up to `top_n` items similar to `query`.
///
/// Scores each row of the matrix by cosine similarity against the resolved
/// row, excludes the query item itself, and ranks similarity-descending with
/// ascending row index as the tie break. Asking for more rows than exist
/// returns everything available rather than erroring.
pub fn recommend(
    query: &str,
    table: &RecordTable,
    matrix: &FeatureMatrix,
    top_n: usize,
) -> Recommendation {
    let Some(idx) = resolve_title(query, table) else {
        debug!(query, "title not resolved");
        return Recommendation::NotFound {
            query: query.to_string(),
        };
    };

    let mut similarities = matrix.similarities(idx);
    similarities[idx] = SELF_SENTINEL;

    let mut order: Vec<usize> = (0..similarities.len()).filter(|&i| i != idx).collect();
    order.sort_by(|&a, &b| {
        similarities[b]
            .partial_cmp(&similarities[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    order.truncate(top_n);

    let entries = order
        .into_iter()
        .map(|i| {
            let record = &table.records()[i];
            RankedEntry {
                name: record.name.clone(),
                genres: record.genres.clone(),
                kind: record.kind.clone(),
                episodes: record.episodes,
                rating: record.rating,
                similarity: similarities[i],
            }
        })
        .collect();
    Recommendation::Ranked(entries)
}
