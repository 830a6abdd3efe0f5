use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::{
    cart::Storefront, dto::orders::OrderResponse, error::GENERIC_FAILURE_MESSAGE, models::CartItem,
};

pub const FALLBACK_CONTACT_EMAIL: &str = "support@herfifteen.co.za";

const EMAIL_SHAPE_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_SHAPE_PATTERN).expect("valid regex"));

#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub notes: String,
    /// Hidden honeypot input, submitted verbatim.
    pub website: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fill in all required fields (Name, Email, Phone, City)")]
    MissingFields,

    #[error("Your cart is empty. Please add some products first.")]
    EmptyCart,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("{0}")]
    Rejected(String),

    #[error(
        "Unable to submit your order. Please check your internet connection and try again, or email us directly at {}",
        FALLBACK_CONTACT_EMAIL
    )]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub order_ref: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderPayload<'a> {
    customer_name: &'a str,
    customer_email: &'a str,
    customer_phone: &'a str,
    customer_city: &'a str,
    order_notes: &'a str,
    website: &'a str,
    cart: &'a [CartItem],
}

pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE_RE.is_match(value)
}

/// Checks done before anything leaves the browser.
pub fn check_submission(storefront: &Storefront, form: &CustomerForm) -> Result<(), SubmitError> {
    let required = [&form.name, &form.email, &form.phone, &form.city];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(SubmitError::MissingFields);
    }
    if storefront.cart().is_empty() {
        return Err(SubmitError::EmptyCart);
    }
    if !is_email_shape(form.email.trim()) {
        return Err(SubmitError::InvalidEmail);
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct OrderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/process-order", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit(
        &self,
        storefront: &mut Storefront,
        form: &CustomerForm,
    ) -> Result<SubmitOutcome, SubmitError> {
        check_submission(storefront, form)?;

        let payload = OrderPayload {
            customer_name: form.name.trim(),
            customer_email: form.email.trim(),
            customer_phone: form.phone.trim(),
            customer_city: form.city.trim(),
            order_notes: form.notes.trim(),
            website: &form.website,
            cart: storefront.cart().items(),
        };
        tracing::debug!(lines = payload.cart.len(), endpoint = %self.endpoint, "submitting order");

        let result: OrderResponse = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        match result {
            OrderResponse {
                success: true,
                order_ref: Some(order_ref),
                message,
                ..
            } => {
                storefront.clear_after_submit();
                Ok(SubmitOutcome { order_ref, message })
            }
            OrderResponse { message, .. } if !message.is_empty() => {
                Err(SubmitError::Rejected(message))
            }
            _ => Err(SubmitError::Rejected(
                GENERIC_FAILURE_MESSAGE.to_string(),
            )),
        }
    }
}
