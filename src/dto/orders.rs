use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// Fields stay optional here; `validate_order` decides what is missing.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_city: Option<String>,
    pub order_notes: Option<String>,
    /// Hidden honeypot input. Humans leave it empty.
    #[schema(value_type = Option<String>)]
    pub website: Option<Value>,
    #[schema(value_type = Option<Vec<CartLineRequest>>)]
    pub cart: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CartLineRequest {
    pub name: Option<String>,
    pub size: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub quantity: Option<Numeric>,
    #[schema(value_type = Option<f64>)]
    pub total: Option<Numeric>,
}

/// A JSON number or a numeric string such as `"640"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(serde_json::Number),
    Text(String),
}

impl Numeric {
    pub fn as_text(&self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl OrderResponse {
    pub fn accepted(order_ref: String, version: &str, timestamp: String) -> Self {
        Self {
            success: true,
            message: "Order submitted successfully!".to_string(),
            order_ref: Some(order_ref),
            version: Some(version.to_string()),
            timestamp: Some(timestamp),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            order_ref: None,
            version: None,
            timestamp: None,
        }
    }
}
