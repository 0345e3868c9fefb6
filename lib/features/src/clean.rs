//! Field-level cleaning: entity decoding, numeric coercion, genre splitting,
//! and median imputation.
//!
//! Per-record anomalies are absorbed here, never raised: unparsable numbers
//! become missing and are later median-filled, malformed genre lists collapse
//! to empty. Only a missing `type` drops a record.

use anirec_core::RawRecord;

/// A record after per-field cleaning but before imputation. `kind` is already
/// guaranteed present; the numeric fields may still be missing.
#[derive(Debug, Clone)]
pub(crate) struct PartialRecord {
    pub name: String,
    pub genres: Vec<String>,
    pub kind: String,
    pub episodes: Option<f32>,
    pub rating: Option<f32>,
}

/// Decode HTML-escaped entities (`&quot;`, `&#39;`, ...) to their literal
/// characters so downstream exact and fuzzy matching sees human-readable text.
pub(crate) fn decode_text(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

/// Coerce an optional text field to a finite number. Anything unparsable
/// (e.g. the literal `"Unknown"`) becomes missing.
pub(crate) fn coerce_numeric(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}

/// Split a comma-separated genre field into lowercased, trimmed, deduplicated
/// tags. Missing input yields an empty list.
pub(crate) fn parse_genres(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let decoded = decode_text(raw).to_lowercase();
    let mut tags: Vec<String> = Vec::new();
    for tag in decoded.split(',') {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Clean a raw record, dropping it only when `type` is missing.
pub(crate) fn clean_record(raw: RawRecord) -> Option<PartialRecord> {
    let kind = raw
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())?
        .to_string();

    Some(PartialRecord {
        name: decode_text(raw.name.as_deref().unwrap_or("").trim()),
        genres: parse_genres(raw.genre.as_deref()),
        kind,
        episodes: coerce_numeric(raw.episodes.as_deref()),
        rating: coerce_numeric(raw.rating.as_deref()),
    })
}

/// Median of the present values of a column. Even counts average the two
/// middle values. Returns 0.0 for an all-missing column so imputation still
/// yields a defined number.
pub(crate) fn median(values: impl Iterator<Item = f32>) -> f32 {
    let mut sorted: Vec<f32> = values.collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
