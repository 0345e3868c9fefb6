use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A raw row as read from the source file, before any cleaning.
///
/// Every field is optional and text-valued: the source data mixes numeric
/// columns with placeholders like `"Unknown"`, so coercion happens later in
/// the feature builder rather than at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub name: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub episodes: Option<String>,
    pub rating: Option<String>,
}

/// A cleaned record. After the feature builder runs, no field is missing:
/// `kind` is guaranteed present and `episodes`/`rating` are imputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Title, HTML-entity decoded, used as the lookup key (case-insensitively).
    pub name: String,
    /// Lowercased, trimmed, deduplicated genre tags. May be empty.
    pub genres: Vec<String>,
    /// Broadcast format (the `type` column), e.g. "TV", "Movie", "OVA".
    pub kind: String,
    pub episodes: f32,
    pub rating: f32,
}

/// An ordered, contiguously indexed table of cleaned records.
///
/// The position of a record in this table is the same index used to address
/// rows of the feature matrix built alongside it. Both are produced together
/// by one build and never re-sliced independently.
#[derive(Debug, Clone)]
pub struct RecordTable {
    records: Vec<Record>,
    /// Lowercased name -> first row holding it. Duplicate names keep the
    /// earliest row, matching first-by-table-order resolution.
    name_index: AHashMap<String, usize>,
}

impl RecordTable {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut name_index = AHashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            name_index.entry(record.name.to_lowercase()).or_insert(idx);
        }
        Self { records, name_index }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over titles in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Case-insensitive exact title lookup. Returns the first matching row
    /// by table order.
    pub fn find_exact(&self, name: &str) -> Option<usize> {
        self.name_index.get(&name.to_lowercase()).copied()
    }
}

impl PartialEq for RecordTable {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            genres: vec!["action".to_string()],
            kind: "TV".to_string(),
            episodes: 12.0,
            rating: 7.5,
        }
    }

    #[test]
    fn test_find_exact_case_insensitive() {
        let table = RecordTable::new(vec![record("Steins;Gate"), record("Cowboy Bebop")]);
        assert_eq!(table.find_exact("steins;gate"), Some(0));
        assert_eq!(table.find_exact("COWBOY BEBOP"), Some(1));
        assert_eq!(table.find_exact("Missing"), None);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_row() {
        let table = RecordTable::new(vec![record("Dup"), record("Other"), record("dup")]);
        assert_eq!(table.find_exact("DUP"), Some(0));
    }
}
