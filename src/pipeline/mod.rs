//! The fitted prediction pipeline and its on-disk artifact.
//!
//! A [`PricePipeline`] bundles the location encoder, the numeric scaler and
//! the random-forest regressor into one unit: `fit` learns all three from the
//! training table, `predict` runs one feature triple through all three. The
//! artifact is a bincode encoding of the whole composite, prefixed with a
//! version marker so a stale file fails loudly at startup instead of
//! mis-predicting.

mod encoder;
mod scaler;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use thiserror::Error;

use crate::schema::{HouseFeatures, HouseRecord};

pub use encoder::LocationEncoder;
pub use scaler::NumericScaler;

/// Bumped whenever the serialized layout changes.
pub const ARTIFACT_VERSION: u32 = 1;

/// Fixed seed so an unchanged dataset reproduces an identical artifact.
const FOREST_SEED: u64 = 42;

const N_TREES: usize = 100;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("empty training set")]
    EmptyDataset,

    #[error("model fit failed: {0}")]
    Fit(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("unsupported artifact version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
}

/// The composite of feature transformation and regression inference.
#[derive(Debug, Serialize, Deserialize)]
pub struct PricePipeline {
    encoder: LocationEncoder,
    scaler: NumericScaler,
    forest: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl PricePipeline {
    /// Fit the encoder, the scaler and the regressor on the training table.
    pub fn fit(records: &[HouseRecord]) -> Result<Self, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let encoder = LocationEncoder::fit(records.iter().map(|r| r.location.as_str()));

        let numeric: Vec<Vec<f64>> = records
            .iter()
            .map(|r| vec![r.size, r.bedrooms as f64])
            .collect();
        let scaler = NumericScaler::fit(&numeric);

        let rows: Vec<Vec<f64>> = records
            .iter()
            .zip(&numeric)
            .map(|(record, numeric_row)| {
                let mut row = encoder.encode(&record.location);
                row.extend(scaler.transform(numeric_row));
                row
            })
            .collect();
        let x = DenseMatrix::from_2d_vec(&rows);
        let y: Vec<f64> = records.iter().map(|r| r.price).collect();

        let forest = RandomForestRegressor::fit(
            &x,
            &y,
            RandomForestRegressorParameters::default()
                .with_n_trees(N_TREES)
                .with_seed(FOREST_SEED),
        )
        .map_err(|e| PipelineError::Fit(e.to_string()))?;

        Ok(Self {
            encoder,
            scaler,
            forest,
        })
    }

    /// Run one feature triple through the full pipeline.
    pub fn predict(&self, features: &HouseFeatures) -> Result<f64, PipelineError> {
        let mut row = self.encoder.encode(&features.location);
        row.extend(
            self.scaler
                .transform(&[features.size, features.bedrooms as f64]),
        );

        let x = DenseMatrix::from_2d_vec(&vec![row]);
        let predictions = self
            .forest
            .predict(&x)
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| PipelineError::Inference("empty prediction output".to_string()))
    }

    /// Serialize the fitted pipeline to `path`, overwriting any previous
    /// artifact. Parent directories are created as needed.
    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &ARTIFACT_VERSION)?;
        bincode::serialize_into(&mut writer, self)?;
        Ok(())
    }

    /// Deserialize a pipeline artifact produced by [`PricePipeline::save`].
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let mut reader = BufReader::new(File::open(path)?);

        let found: u32 = bincode::deserialize_from(&mut reader)?;
        if found != ARTIFACT_VERSION {
            return Err(PipelineError::Version {
                found,
                expected: ARTIFACT_VERSION,
            });
        }

        Ok(bincode::deserialize_from(&mut reader)?)
    }
}
