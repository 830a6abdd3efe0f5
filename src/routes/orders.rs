use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, header},
    routing::post,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    VERSION,
    dto::orders::{OrderRequest, OrderResponse},
    error::{AppError, AppResult},
    middleware::client_ip::ClientIp,
    order_log::LogCategory,
    services::{order_service, order_validation::ValidationError},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/process-order",
            post(process_order).fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-process-order-version"),
            HeaderValue::from_static(VERSION),
        ))
}

#[utoipa::path(
    post,
    path = "/process-order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order accepted, or rejected as spam", body = OrderResponse),
        (status = 405, description = "Method not allowed", body = OrderResponse),
        (status = 500, description = "Order rejected or notification failed", body = OrderResponse),
    ),
    tag = "Orders"
)]
pub async fn process_order(
    State(state): State<AppState>,
    client_ip: ClientIp,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> AppResult<Json<OrderResponse>> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::info!(client_ip = client_ip.as_str(), error = %rejection.body_text(), "order payload rejected");
            state
                .order_log
                .record(
                    LogCategory::Errors,
                    client_ip.as_str(),
                    &format!("Order processing error: {}", rejection.body_text()),
                    None,
                )
                .await;
            return Err(ValidationError::MalformedPayload.into());
        }
    };

    let response = order_service::process_order(&state, client_ip.as_str(), request).await?;
    Ok(Json(response))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
