//! Mean/variance scaling of the numeric feature columns.

use serde::{Deserialize, Serialize};

/// Per-column standard scaler: `(x - mean) / std`.
///
/// A constant column has zero variance; its divisor is pinned to 1.0 so the
/// column scales to all zeros instead of NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl NumericScaler {
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let n = rows.len() as f64;

        let mut means = vec![0.0; width];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value / n;
            }
        }

        let mut stds = vec![0.0; width];
        for row in rows {
            for ((std, mean), value) in stds.iter_mut().zip(&means).zip(row) {
                *std += (value - mean).powi(2) / n;
            }
        }
        for std in &mut stds {
            *std = std.sqrt();
            if *std < f64::EPSILON {
                *std = 1.0;
            }
        }

        Self { means, stds }
    }

    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        row.iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(value, (mean, std))| (value - mean) / std)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_and_scales_each_column() {
        let scaler = NumericScaler::fit(&[vec![1.0, 10.0], vec![3.0, 30.0]]);

        // Column means are (2, 20), population stds are (1, 10).
        assert_eq!(scaler.transform(&[2.0, 20.0]), vec![0.0, 0.0]);
        assert_eq!(scaler.transform(&[3.0, 10.0]), vec![1.0, -1.0]);
    }

    #[test]
    fn constant_column_scales_to_zero() {
        let scaler = NumericScaler::fit(&[vec![5.0], vec![5.0], vec![5.0]]);

        let scaled = scaler.transform(&[5.0]);
        assert_eq!(scaled, vec![0.0]);
        assert!(scaled[0].is_finite());
    }
}
