mod common;

use axum::http::{Method, StatusCode, header};
use common::{
    body_json, build_failing_app, build_test_app, post_json, post_raw, send, valid_order,
};
use herxv_shop::{
    error::{GENERIC_FAILURE_MESSAGE, GENERIC_SPAM_MESSAGE},
    services::order_reference::is_order_reference,
};

#[tokio::test]
async fn accepted_order_sends_owner_then_customer_email() {
    let app = build_test_app();

    let response = post_json(app.router.clone(), "/process-order", valid_order()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order submitted successfully!");
    let order_ref = body["order_ref"].as_str().unwrap().to_string();
    assert!(is_order_reference(&order_ref), "unexpected reference {order_ref}");
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);

    let owner = &sent[0];
    assert_eq!(owner.to.address, "owner@herxv.test");
    assert_eq!(owner.from.name.as_deref(), Some("HER XV Orders"));
    assert_eq!(
        owner.subject,
        format!("New HER XV Order - {order_ref} - Thandi Mokoena")
    );
    assert!(owner.html_body.contains("R960.00"));
    assert!(owner.html_body.contains("Pretoria"));

    let customer = &sent[1];
    assert_eq!(customer.to.address, "thandi@example.com");
    assert_eq!(customer.from.name.as_deref(), Some("HER XV"));
    assert_eq!(
        customer.subject,
        format!("Order Confirmation - {order_ref} - HER XV")
    );
    assert!(customer.html_body.contains("Blom Squad"));

    let orders_log = std::fs::read_to_string(app.logs.path().join("orders.log")).unwrap();
    assert!(orders_log.contains("Process Order starting"));
    assert!(orders_log.contains(&format!("Order processed successfully - {order_ref}")));
}

#[tokio::test]
async fn response_carries_no_cache_and_version_headers() {
    let app = build_test_app();

    let response = post_json(app.router, "/process-order", valid_order()).await;
    let headers = response.headers();
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(headers[header::PRAGMA], "no-cache");
    assert_eq!(headers[header::EXPIRES], "0");
    assert_eq!(
        headers["x-process-order-version"],
        herxv_shop::VERSION
    );
}

#[tokio::test]
async fn honeypot_gets_generic_answer_and_no_email() {
    let app = build_test_app();
    let mut order = valid_order();
    order["website"] = "http://spam.example".into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], GENERIC_SPAM_MESSAGE);
    assert!(body.get("order_ref").is_none());

    assert!(app.mailer.sent().is_empty());
    let spam_log = std::fs::read_to_string(app.logs.path().join("spam.log")).unwrap();
    assert!(spam_log.contains("Honeypot field filled"));
}

async fn assert_generic_rejection(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], GENERIC_FAILURE_MESSAGE);
    assert!(body.get("order_ref").is_none());
}

fn errors_log(app: &common::TestApp) -> String {
    std::fs::read_to_string(app.logs.path().join("errors.log")).unwrap()
}

#[tokio::test]
async fn invalid_email_is_rejected_without_sending() {
    let app = build_test_app();
    let mut order = valid_order();
    order["customerEmail"] = "not-an-email".into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_generic_rejection(response).await;

    assert!(app.mailer.sent().is_empty());
    assert!(errors_log(&app).contains("Invalid email address"));
}

#[tokio::test]
async fn missing_name_is_logged_by_field() {
    let app = build_test_app();
    let mut order = valid_order();
    order["customerName"] = "   ".into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_generic_rejection(response).await;
    assert!(errors_log(&app).contains("Missing required field: customerName"));
}

#[tokio::test]
async fn empty_cart_is_rejected() {
    let app = build_test_app();
    let mut order = valid_order();
    order["cart"] = serde_json::json!([]);

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_generic_rejection(response).await;
    assert!(errors_log(&app).contains("Cart is empty"));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn cart_line_without_total_is_rejected() {
    let app = build_test_app();
    let mut order = valid_order();
    order["cart"] = serde_json::json!([{ "name": "Her XV", "size": "M", "quantity": 1 }]);

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_generic_rejection(response).await;
    assert!(errors_log(&app).contains("Cart item 0 missing required field: total"));
}

#[tokio::test]
async fn overflowing_totals_are_rejected_not_panicking() {
    let app = build_test_app();
    let mut order = valid_order();
    order["cart"][0]["total"] = "79228162514264337593543950335".into();
    order["cart"][1]["total"] = "79228162514264337593543950335".into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_generic_rejection(response).await;
    assert!(errors_log(&app).contains("Cart item 1 has invalid total"));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn whitespace_honeypot_is_spam() {
    let app = build_test_app();
    let mut order = valid_order();
    order["website"] = "   ".into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], GENERIC_SPAM_MESSAGE);
    assert!(app.mailer.sent().is_empty());
    assert!(app.logs.path().join("spam.log").exists());
}

#[tokio::test]
async fn non_string_honeypot_is_spam() {
    let app = build_test_app();
    let mut order = valid_order();
    order["website"] = 1.into();

    let response = post_json(app.router.clone(), "/process-order", order).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], GENERIC_SPAM_MESSAGE);
    assert!(app.mailer.sent().is_empty());
    let spam_log = std::fs::read_to_string(app.logs.path().join("spam.log")).unwrap();
    assert!(spam_log.contains("Honeypot field filled"));
}

#[tokio::test]
async fn malformed_json_gets_the_generic_failure() {
    let app = build_test_app();

    let response = post_raw(app.router.clone(), "/process-order", "{not json").await;
    assert_generic_rejection(response).await;
    assert!(errors_log(&app).contains("Order processing error"));
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn other_methods_get_405() {
    let app = build_test_app();

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = send(app.router.clone(), method, "/process-order").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Method not allowed");
    }
    assert!(app.mailer.sent().is_empty());
}

#[tokio::test]
async fn transport_failure_returns_generic_500() {
    let (router, logs) = build_failing_app();

    let response = post_json(router, "/process-order", valid_order()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], GENERIC_FAILURE_MESSAGE);
    assert!(body.get("order_ref").is_none());

    let errors_log = std::fs::read_to_string(logs.path().join("errors.log")).unwrap();
    assert!(errors_log.contains("Order processing error"));
}

#[tokio::test]
async fn each_order_gets_its_own_reference() {
    let app = build_test_app();

    let first = body_json(post_json(app.router.clone(), "/process-order", valid_order()).await).await;
    let second = body_json(post_json(app.router.clone(), "/process-order", valid_order()).await).await;

    assert_ne!(first["order_ref"], second["order_ref"]);
    assert_eq!(app.mailer.sent().len(), 4);
}
