//! Vocabulary-based categorical encoders.
//!
//! Both the one-hot `type` block and the multi-hot genre block are encoded
//! against a vocabulary derived entirely from the table being built; there is
//! no external vocabulary. Column order is sorted, which makes a build
//! reproducible for the same input.

use ahash::AHashMap;

/// An encoder over the distinct values observed in one build.
#[derive(Debug, Clone)]
pub struct VocabEncoder {
    vocab: Vec<String>,
    index: AHashMap<String, usize>,
}

impl VocabEncoder {
    /// Collect distinct values and fix the column order (sorted).
    pub fn fit<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocab: Vec<String> = Vec::new();
        for value in values {
            if !vocab.iter().any(|v| v == value) {
                vocab.push(value.to_string());
            }
        }
        vocab.sort();

        let index = vocab
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { vocab, index }
    }

    /// Number of columns this encoder contributes.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.vocab.len()
    }

    #[inline]
    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    /// One-hot encode a single categorical value.
    #[must_use]
    pub fn encode_one(&self, value: &str) -> Vec<f32> {
        let mut row = vec![0.0; self.vocab.len()];
        if let Some(&i) = self.index.get(value) {
            row[i] = 1.0;
        }
        row
    }

    /// Multi-hot encode a set of tags; a record with tags {a, b} gets 1s in
    /// both columns.
    #[must_use]
    pub fn encode_many<S: AsRef<str>>(&self, values: &[S]) -> Vec<f32> {
        let mut row = vec![0.0; self.vocab.len()];
        for value in values {
            if let Some(&i) = self.index.get(value.as_ref()) {
                row[i] = 1.0;
            }
        }
        row
    }
}
