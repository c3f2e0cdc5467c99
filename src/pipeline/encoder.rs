//! One-hot encoding of the location column.

use serde::{Deserialize, Serialize};

/// One-hot encoder fitted on the training set's location values.
///
/// Categories are stored sorted and deduplicated so the column order is
/// stable across fits of the same data. A location unseen during fitting
/// encodes as an all-zero block rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEncoder {
    categories: Vec<String>,
}

impl LocationEncoder {
    pub fn fit<'a>(locations: impl IntoIterator<Item = &'a str>) -> Self {
        let mut categories: Vec<String> = locations.into_iter().map(str::to_owned).collect();
        categories.sort();
        categories.dedup();
        Self { categories }
    }

    /// Number of columns this encoder produces.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    pub fn encode(&self, location: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.categories.len()];
        if let Ok(idx) = self.categories.binary_search_by(|c| c.as_str().cmp(location)) {
            row[idx] = 1.0;
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_category_at_its_column() {
        let encoder = LocationEncoder::fit(["B", "A", "B", "C"]);

        assert_eq!(encoder.width(), 3);
        assert_eq!(encoder.encode("A"), vec![1.0, 0.0, 0.0]);
        assert_eq!(encoder.encode("B"), vec![0.0, 1.0, 0.0]);
        assert_eq!(encoder.encode("C"), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn unknown_category_encodes_to_zeros() {
        let encoder = LocationEncoder::fit(["A", "B"]);

        assert_eq!(encoder.encode("Z"), vec![0.0, 0.0]);
    }

    #[test]
    fn column_order_is_stable_across_input_order() {
        let a = LocationEncoder::fit(["C", "A", "B"]);
        let b = LocationEncoder::fit(["B", "C", "A", "A"]);

        assert_eq!(a.encode("B"), b.encode("B"));
    }
}
