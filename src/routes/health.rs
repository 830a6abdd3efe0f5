use axum::Json;
use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    VERSION,
    response::{ApiResponse, Meta},
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct VersionData {
    pub version: String,
    pub server_time: String,
    pub unix_time: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
        tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}

/// Deployment check: which build is answering and what time it thinks it is.
#[utoipa::path(
    get,
    path = "/version",
    responses(
        (status = 200, description = "Running version", body = ApiResponse<VersionData>),
    ),
    tag = "Health"
)]
pub async fn version() -> Json<ApiResponse<VersionData>> {
    let now = Local::now();
    let data = VersionData {
        version: VERSION.to_string(),
        server_time: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        unix_time: now.timestamp(),
    };

    Json(ApiResponse::success("Version", data, Some(Meta::empty())))
}
