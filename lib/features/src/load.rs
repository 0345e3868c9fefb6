//! CSV ingestion.
//!
//! An unreadable file or a missing required column is fatal
//! ([`Error::DataLoad`] / [`Error::MissingColumn`]); malformed individual
//! rows are skipped with a warning, never raised.

use std::path::Path;

use anirec_core::{Error, FeatureMatrix, RawRecord, RecordTable, Result};
use tracing::{info, warn};

use crate::build::build;

/// Columns the source file must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "genre", "type", "episodes", "rating"];

/// Read raw records from a CSV file with the five required columns.
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::DataLoad(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::DataLoad(e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<RawRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!(line = line + 2, error = %e, "skipping malformed row"),
        }
    }
    Ok(records)
}

/// Load a CSV source and run the full feature build.
///
/// This is the one entry point a front end needs before querying: it returns
/// the immutable (table, matrix) snapshot described in the crate docs.
/// Calling it twice on the same file yields identical snapshots.
pub fn load_and_process(path: impl AsRef<Path>) -> Result<(RecordTable, FeatureMatrix)> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading dataset");
    let raw = load_csv(path)?;
    let (table, matrix) = build(raw)?;
    info!(
        rows = table.len(),
        features = matrix.ncols(),
        "dataset ready"
    );
    Ok((table, matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
anime_id,name,genre,type,episodes,rating,members
1,Cowboy Bebop,\"Action, Adventure, Sci-Fi\",TV,26,8.82,486824
2,Steins;Gate,\"Sci-Fi, Thriller\",TV,24,9.17,673572
3,Akira,\"Action, Sci-Fi\",Movie,1,8.13,330556
4,Lost Tape,Drama,,Unknown,6.1,22
5,Short One,Comedy,OVA,Unknown,,105
";

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_reads_rows() {
        let file = write_csv(SAMPLE_CSV);
        let records = load_csv(file.path()).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name.as_deref(), Some("Cowboy Bebop"));
        // Empty type cell comes through as missing.
        assert!(records[3].kind.is_none());
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/nonexistent/anime.csv")).unwrap_err();
        assert!(matches!(err, Error::DataLoad(_)));
    }

    #[test]
    fn test_load_csv_missing_column() {
        let file = write_csv("anime_id,name,genre,type,episodes\n1,A,Action,TV,12\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "rating"));
    }

    #[test]
    fn test_load_and_process_imputes_everything() {
        let file = write_csv(SAMPLE_CSV);
        let (table, matrix) = load_and_process(file.path()).unwrap();
        // Row 4 has no type and is dropped.
        assert_eq!(table.len(), 4);
        assert_eq!(matrix.nrows(), table.len());
        for record in table.records() {
            assert!(record.episodes.is_finite());
            assert!(record.rating.is_finite());
        }
    }

    #[test]
    fn test_load_and_process_is_idempotent() {
        let file = write_csv(SAMPLE_CSV);
        let (table_a, matrix_a) = load_and_process(file.path()).unwrap();
        let (table_b, matrix_b) = load_and_process(file.path()).unwrap();
        assert_eq!(table_a, table_b);
        assert_eq!(matrix_a, matrix_b);
    }
}
