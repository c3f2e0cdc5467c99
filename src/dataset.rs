//! Training data loading

use std::path::Path;

use crate::schema::HouseRecord;

/// Load the training table from a CSV file with a
/// `location,size,bedrooms,price` header row.
pub fn load_csv(path: &Path) -> Result<Vec<HouseRecord>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader.deserialize().collect()
}
