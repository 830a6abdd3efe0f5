use chrono::Local;
use serde_json::json;

use crate::{
    VERSION,
    dto::orders::{OrderRequest, OrderResponse},
    error::{AppError, AppResult},
    order_log::LogCategory,
    services::{
        notification_service::{OrderNotice, dispatch_order_emails},
        order_reference::generate_order_reference,
        order_validation::{ValidationError, validate_order},
    },
    state::AppState,
};

/// Validate the posted order, email owner and customer, and report the
/// outcome. Nothing is persisted beyond the order log.
pub async fn process_order(
    state: &AppState,
    client_ip: &str,
    request: OrderRequest,
) -> AppResult<OrderResponse> {
    let log = &state.order_log;
    log.record(
        LogCategory::Orders,
        client_ip,
        "Process Order starting",
        Some(&json!({
            "version": VERSION,
            "timestamp": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })),
    )
    .await;

    let order = match validate_order(&request) {
        Ok(order) => order,
        Err(ValidationError::SpamDetected) => {
            tracing::warn!(client_ip, "honeypot field filled, rejecting order");
            log.record(
                LogCategory::Spam,
                client_ip,
                "Honeypot field filled - likely spam",
                Some(&json!(request)),
            )
            .await;
            return Err(AppError::SpamDetected);
        }
        Err(err) => {
            tracing::info!(client_ip, error = %err, "order rejected");
            log.record(
                LogCategory::Errors,
                client_ip,
                &format!("Order processing error: {err}"),
                Some(&json!(request)),
            )
            .await;
            return Err(AppError::Validation(err));
        }
    };

    let now = Local::now();
    let order_ref = generate_order_reference(now.date_naive());
    let placed_at = now.format("%Y-%m-%d %H:%M:%S").to_string();
    tracing::debug!(%order_ref, lines = order.lines.len(), total = %order.grand_total, "order validated");

    let notice = OrderNotice {
        order_ref: &order_ref,
        placed_at: &placed_at,
        client_ip,
        order: &order,
    };

    if let Err(err) = dispatch_order_emails(state.mailer.as_ref(), &state.mail, &notice).await {
        tracing::error!(%order_ref, error = %err, "order notification failed");
        log.record(
            LogCategory::Errors,
            client_ip,
            &format!("Order processing error: {err}"),
            Some(&json!(request)),
        )
        .await;
        return Err(AppError::Notification(err));
    }

    log.record(
        LogCategory::Orders,
        client_ip,
        &format!("Order processed successfully - {order_ref}"),
        Some(&json!({
            "order_ref": order_ref,
            "customer": order.customer.name,
            "email": order.customer.email,
            "total": order.grand_total,
            "items_count": order.lines.len(),
        })),
    )
    .await;
    tracing::info!(%order_ref, items = order.lines.len(), "order processed");

    Ok(OrderResponse::accepted(order_ref, VERSION, placed_at))
}
