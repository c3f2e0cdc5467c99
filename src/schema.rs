//! Shared record types for the trainer/predictor feature contract.
//!
//! Both binaries build feature rows through [`HouseFeatures`]; the positional
//! layout of the underlying numeric row is owned by the pipeline alone, so
//! neither side carries an implicit column-ordering convention.

use serde::Deserialize;

/// Lower bound on a plausible house size.
pub const MIN_SIZE: f64 = 10.0;

/// Inclusive bedroom count range accepted by the service.
pub const MIN_BEDROOMS: i64 = 0;
pub const MAX_BEDROOMS: i64 = 50;

/// Bedroom count assumed when a request omits it.
pub const DEFAULT_BEDROOMS: i64 = 2;

/// One row of the training table.
#[derive(Debug, Clone, Deserialize)]
pub struct HouseRecord {
    pub location: String,
    pub size: f64,
    pub bedrooms: i64,
    pub price: f64,
}

/// The feature triple fed to the pipeline for one prediction.
#[derive(Debug, Clone)]
pub struct HouseFeatures {
    pub location: String,
    pub size: f64,
    pub bedrooms: i64,
}
