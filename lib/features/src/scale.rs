//! Standard-score normalization for the numeric feature columns.

/// Standardizes a column to zero mean and unit variance: z = (x - mean) / std.
///
/// Parameters are fit once over the full imputed column. A zero-variance
/// column transforms to all zeros rather than dividing by zero, so NaN/Inf
/// never reaches the feature matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: f32,
    std: f32,
}

impl StandardScaler {
    /// Fit mean and (population) standard deviation over a column.
    #[must_use]
    pub fn fit(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self { mean: 0.0, std: 0.0 };
        }
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        Self {
            mean,
            std: variance.sqrt(),
        }
    }

    #[inline]
    #[must_use]
    pub fn mean(&self) -> f32 {
        self.mean
    }

    #[inline]
    #[must_use]
    pub fn std(&self) -> f32 {
        self.std
    }

    /// Transform a single value with the fitted parameters.
    #[inline]
    #[must_use]
    pub fn transform(&self, value: f32) -> f32 {
        if self.std == 0.0 {
            0.0
        } else {
            (value - self.mean) / self.std
        }
    }
}
