//! Offline training binary
//!
//! Linear one-shot sequence: load the training table, fit the pipeline,
//! serialize the artifact. Any failure aborts the run before the artifact
//! is written; serialization is the last step.

use anyhow::Context;

use homeprice::config::Config;
use homeprice::dataset;
use homeprice::pipeline::PricePipeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // 1. Load the training table
    tracing::info!("Loading training data from {}", config.data_path.display());
    let records = dataset::load_csv(&config.data_path)
        .with_context(|| format!("failed to read {}", config.data_path.display()))?;
    tracing::info!("Loaded {} rows", records.len());

    // 2. Fit the pipeline (encoder + scaler + forest)
    let pipeline = PricePipeline::fit(&records).context("failed to fit model")?;

    // 3. Serialize the fitted pipeline
    pipeline
        .save(&config.model_path)
        .with_context(|| format!("failed to write {}", config.model_path.display()))?;
    tracing::info!("Model artifact written to {}", config.model_path.display());

    Ok(())
}
