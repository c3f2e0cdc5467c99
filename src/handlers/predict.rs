//! Price prediction handler

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{HouseFeatures, DEFAULT_BEDROOMS};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct PredictParams {
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,

    #[validate(range(min = 10.0, message = "size must be at least 10.0"))]
    pub size: f64,

    #[serde(default = "default_bedrooms")]
    #[validate(range(min = 0, max = 50, message = "bedrooms must be between 0 and 50"))]
    pub bedrooms: i64,
}

fn default_bedrooms() -> i64 {
    DEFAULT_BEDROOMS
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: i64,
}

/// Predict a price for one house.
///
/// Bounds are enforced here, before the request reaches the model; only a
/// validated feature triple is handed to the pipeline.
pub async fn predict(
    State(state): State<AppState>,
    Query(params): Query<PredictParams>,
) -> AppResult<Json<PredictResponse>> {
    params.validate()?;

    let features = HouseFeatures {
        location: params.location,
        size: params.size,
        bedrooms: params.bedrooms,
    };

    let price = state.pipeline.predict(&features)?;

    Ok(Json(PredictResponse {
        prediction: price as i64,
    }))
}
