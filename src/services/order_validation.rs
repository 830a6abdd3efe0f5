use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::Value;
use thiserror::Error;

use crate::dto::orders::{CartLineRequest, Numeric, OrderRequest};

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 40;
const MAX_CITY_LEN: usize = 100;
const MAX_NOTES_LEN: usize = 2000;
const MAX_ITEM_NAME_LEN: usize = 200;
const MAX_SIZE_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Honeypot field filled")]
    SpamDetected,

    #[error("Invalid order payload")]
    MalformedPayload,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart must be a list of items")]
    CartNotList,

    #[error("Cart item {0} is malformed")]
    MalformedLine(usize),

    #[error("Cart item {index} missing required field: {field}")]
    LineMissingField { index: usize, field: &'static str },

    #[error("Cart item {0} has invalid quantity")]
    InvalidQuantity(usize),

    #[error("Cart item {0} has invalid total")]
    InvalidTotal(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer: Customer,
    pub lines: Vec<OrderLine>,
    pub grand_total: Decimal,
}

pub fn validate_order(request: &OrderRequest) -> Result<ValidatedOrder, ValidationError> {
    if is_honeypot_filled(request.website.as_ref()) {
        return Err(ValidationError::SpamDetected);
    }

    let name = required(request.customer_name.as_deref(), "customerName")?;
    let email = required(request.customer_email.as_deref(), "customerEmail")?;
    let phone = required(request.customer_phone.as_deref(), "customerPhone")?;

    let email = email
        .parse::<lettre::Address>()
        .map_err(|_| ValidationError::InvalidEmail)?
        .to_string();

    let lines = match &request.cart {
        None | Some(Value::Null) => return Err(ValidationError::EmptyCart),
        Some(Value::Array(lines)) if lines.is_empty() => return Err(ValidationError::EmptyCart),
        Some(Value::Array(lines)) => lines
            .iter()
            .enumerate()
            .map(|(index, line)| validate_line(index, line))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ValidationError::CartNotList),
    };

    let grand_total = lines
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |sum, (index, line)| {
            sum.checked_add(line.total)
                .ok_or(ValidationError::InvalidTotal(index))
        })?;

    Ok(ValidatedOrder {
        customer: Customer {
            name: single_line(name, MAX_NAME_LEN),
            email,
            phone: single_line(phone, MAX_PHONE_LEN),
            city: optional(request.customer_city.as_deref()).map(|c| single_line(c, MAX_CITY_LEN)),
            notes: optional(request.order_notes.as_deref()).map(|n| multi_line(n, MAX_NOTES_LEN)),
        },
        lines,
        grand_total,
    })
}

/// Anything but an absent, `null` or exactly empty string value counts as filled.
fn is_honeypot_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

fn validate_line(index: usize, raw: &Value) -> Result<OrderLine, ValidationError> {
    if !raw.is_object() {
        return Err(ValidationError::MalformedLine(index));
    }
    let line: CartLineRequest =
        serde_json::from_value(raw.clone()).map_err(|_| ValidationError::MalformedLine(index))?;

    let missing = |field| ValidationError::LineMissingField { index, field };
    let name = optional(line.name.as_deref()).ok_or_else(|| missing("name"))?;
    let size = optional(line.size.as_deref()).ok_or_else(|| missing("size"))?;
    let quantity = line.quantity.as_ref().ok_or_else(|| missing("quantity"))?;
    let total = line.total.as_ref().ok_or_else(|| missing("total"))?;

    let quantity = parse_decimal(quantity)
        .filter(|q| *q >= Decimal::ONE)
        .and_then(|q| q.trunc().to_u32())
        .ok_or(ValidationError::InvalidQuantity(index))?;
    let total = parse_decimal(total)
        .filter(|t| *t > Decimal::ZERO)
        .ok_or(ValidationError::InvalidTotal(index))?;

    Ok(OrderLine {
        name: single_line(name, MAX_ITEM_NAME_LEN),
        size: single_line(size, MAX_SIZE_LEN),
        quantity,
        total,
    })
}

fn parse_decimal(value: &Numeric) -> Option<Decimal> {
    let text = value.as_text();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    optional(value).ok_or(ValidationError::MissingField(field))
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn single_line(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(|c| !c.is_control())
        .take(max_len)
        .collect::<String>()
        .trim()
        .to_string()
}

fn multi_line(value: &str, max_len: usize) -> String {
    value
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .take(max_len)
        .collect::<String>()
        .trim()
        .to_string()
}
