//! Service status handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    #[serde(rename = "API status")]
    status: &'static str,
}

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ready" })
}
