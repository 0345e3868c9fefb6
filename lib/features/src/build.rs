//! The feature build: raw records in, (table, matrix) snapshot out.

use anirec_core::{Error, FeatureMatrix, RawRecord, Record, RecordTable, Result};
use tracing::debug;

use crate::clean::{clean_record, median};
use crate::encode::VocabEncoder;
use crate::scale::StandardScaler;

/// Build the cleaned table and its feature matrix from raw records.
///
/// Steps, in order: per-field cleaning (dropping only records without a
/// `type`), median imputation of the numeric columns over the filtered table,
/// z-score normalization, one-hot `type` encoding, multi-hot genre encoding.
/// The output pair shares row order; `matrix.row(i)` describes
/// `table.get(i)` for every `i`.
///
/// Deterministic for a fixed input: building twice yields element-wise
/// identical tables and matrices.
pub fn build(raw: Vec<RawRecord>) -> Result<(RecordTable, FeatureMatrix)> {
    let total = raw.len();
    let partials: Vec<_> = raw.into_iter().filter_map(clean_record).collect();
    debug!(total, kept = partials.len(), "cleaned raw records");

    // Medians are computed after filtering, before any scaling.
    let episodes_median = median(partials.iter().filter_map(|p| p.episodes));
    let rating_median = median(partials.iter().filter_map(|p| p.rating));

    let records: Vec<Record> = partials
        .into_iter()
        .map(|p| Record {
            name: p.name,
            genres: p.genres,
            kind: p.kind,
            episodes: p.episodes.unwrap_or(episodes_median),
            rating: p.rating.unwrap_or(rating_median),
        })
        .collect();

    let episodes_col: Vec<f32> = records.iter().map(|r| r.episodes).collect();
    let rating_col: Vec<f32> = records.iter().map(|r| r.rating).collect();
    let episodes_scaler = StandardScaler::fit(&episodes_col);
    let rating_scaler = StandardScaler::fit(&rating_col);

    let kind_encoder = VocabEncoder::fit(records.iter().map(|r| r.kind.as_str()));
    let genre_encoder = VocabEncoder::fit(
        records
            .iter()
            .flat_map(|r| r.genres.iter().map(String::as_str)),
    );
    debug!(
        kinds = kind_encoder.width(),
        genres = genre_encoder.width(),
        "fitted categorical vocabularies"
    );

    let width = 2 + kind_encoder.width() + genre_encoder.width();
    let rows: Vec<Vec<f32>> = records
        .iter()
        .map(|r| {
            let mut row = Vec::with_capacity(width);
            row.push(episodes_scaler.transform(r.episodes));
            row.push(rating_scaler.transform(r.rating));
            row.extend(kind_encoder.encode_one(&r.kind));
            row.extend(genre_encoder.encode_many(&r.genres));
            row
        })
        .collect();

    let matrix = FeatureMatrix::from_rows(rows)?;
    let table = RecordTable::new(records);
    if matrix.nrows() != table.len() {
        return Err(Error::RowMismatch {
            table: table.len(),
            matrix: matrix.nrows(),
        });
    }
    Ok((table, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        name: &str,
        genre: Option<&str>,
        kind: Option<&str>,
        episodes: Option<&str>,
        rating: Option<&str>,
    ) -> RawRecord {
        RawRecord {
            name: Some(name.to_string()),
            genre: genre.map(str::to_string),
            kind: kind.map(str::to_string),
            episodes: episodes.map(str::to_string),
            rating: rating.map(str::to_string),
        }
    }

    fn sample() -> Vec<RawRecord> {
        vec![
            raw("Alpha", Some("Action, Sci-Fi"), Some("TV"), Some("26"), Some("8.0")),
            raw("Beta", Some("Action"), Some("Movie"), Some("1"), Some("7.0")),
            raw("Gamma", Some("Drama"), Some("TV"), Some("Unknown"), Some("6.0")),
            raw("NoType", Some("Action"), None, Some("12"), Some("5.0")),
            raw("Delta", None, Some("OVA"), Some("4"), None),
        ]
    }

    #[test]
    fn test_build_filters_and_aligns() {
        let (table, matrix) = build(sample()).unwrap();
        // "NoType" is dropped, everything else survives.
        assert_eq!(table.len(), 4);
        assert_eq!(matrix.nrows(), table.len());
        assert!(table.find_exact("notype").is_none());
        // Indices are contiguous after the drop.
        assert_eq!(table.find_exact("delta"), Some(3));
    }

    #[test]
    fn test_build_imputes_with_median() {
        let (table, _) = build(sample()).unwrap();
        // Episodes present: 26, 1, 4 -> median 4. Gamma's "Unknown" is filled.
        let gamma = table.get(table.find_exact("gamma").unwrap()).unwrap();
        assert_eq!(gamma.episodes, 4.0);
        // Ratings present: 8, 7, 6 -> median 7. Delta's missing rating is filled.
        let delta = table.get(table.find_exact("delta").unwrap()).unwrap();
        assert_eq!(delta.rating, 7.0);
    }

    #[test]
    fn test_build_column_layout() {
        let (table, matrix) = build(sample()).unwrap();
        // 2 numerics + kinds {Movie, OVA, TV} + genres {action, drama, sci-fi}.
        assert_eq!(matrix.ncols(), 2 + 3 + 3);

        let alpha = matrix.row(table.find_exact("alpha").unwrap());
        // Kind block is sorted: Movie, OVA, TV.
        assert_eq!(&alpha[2..5], &[0.0, 0.0, 1.0]);
        // Genre block is sorted: action, drama, sci-fi.
        assert_eq!(&alpha[5..8], &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_build_matrix_is_finite() {
        // Single record: both numeric columns have zero variance.
        let (_, matrix) = build(vec![raw(
            "Solo",
            Some("Action"),
            Some("TV"),
            Some("12"),
            Some("7.0"),
        )])
        .unwrap();
        assert!(matrix.row(0).iter().all(|v| v.is_finite()));
        assert_eq!(&matrix.row(0)[..2], &[0.0, 0.0]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let (table_a, matrix_a) = build(sample()).unwrap();
        let (table_b, matrix_b) = build(sample()).unwrap();
        assert_eq!(table_a, table_b);
        assert_eq!(matrix_a, matrix_b);
    }

    #[test]
    fn test_build_decodes_entities_before_lookup() {
        let (table, _) = build(vec![raw(
            "&quot;Eiji&quot;",
            Some("Sports"),
            Some("OVA"),
            Some("1"),
            Some("5.5"),
        )])
        .unwrap();
        assert_eq!(table.find_exact("\"eiji\""), Some(0));
    }

    #[test]
    fn test_build_empty_input() {
        let (table, matrix) = build(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(matrix.is_empty());
    }
}
