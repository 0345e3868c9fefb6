use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dense row-major feature matrix, one row per cleaned record.
///
/// Columns are fixed once built: z-scored numerics, then the one-hot type
/// block, then the multi-hot genre block. The matrix is immutable after
/// construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f32>,
}

impl FeatureMatrix {
    /// Build from per-record rows. All rows must share the same width.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::DataLoad(format!(
                    "feature row {} has width {}, expected {}",
                    idx,
                    row.len(),
                    ncols
                )));
            }
            data.extend_from_slice(&row);
        }
        Ok(Self { nrows, ncols, data })
    }

    #[inline]
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    #[inline]
    pub fn row(&self, idx: usize) -> &[f32] {
        let start = idx * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Cosine similarity of row `idx` against every row, including itself.
    ///
    /// Scores lie in [-1, 1]. Zero-norm rows score 0 against everything.
    pub fn similarities(&self, idx: usize) -> Vec<f32> {
        let query = self.row(idx);
        (0..self.nrows)
            .map(|i| cosine_similarity(query, self.row(i)))
            .collect()
    }
}

/// Cosine similarity between two equal-length slices.
///
/// Returns 0.0 when either vector has zero norm, so degenerate rows never
/// propagate NaN into the ranking.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_norm_is_zero_not_nan() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_similarities_include_self() {
        let matrix =
            FeatureMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]])
                .unwrap();
        let sims = matrix.similarities(0);
        assert_eq!(sims.len(), 3);
        assert!((sims[0] - 1.0).abs() < 1e-6);
        assert!(sims[1].abs() < 1e-6);
        assert!((sims[2] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }
}
