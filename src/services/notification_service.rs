use askama::Template;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    config::MailConfig,
    mailer::{MailError, Mailer, OutgoingEmail, Recipient},
    services::order_validation::ValidatedOrder,
};

pub const BRAND: &str = "HER XV";
pub const CONTACT_EMAIL: &str = "herfifteen@gmail.com";
pub const INSTAGRAM_HANDLE: &str = "@herfifteenxv";

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Everything the templates need about one accepted order.
#[derive(Debug, Clone, Copy)]
pub struct OrderNotice<'a> {
    pub order_ref: &'a str,
    pub placed_at: &'a str,
    pub client_ip: &'a str,
    pub order: &'a ValidatedOrder,
}

struct ItemRow {
    name: String,
    size: String,
    quantity: u32,
    total: String,
}

#[derive(Template)]
#[template(path = "email/order_owner.html")]
struct OwnerEmailHtml<'a> {
    order_ref: &'a str,
    placed_at: &'a str,
    client_ip: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    city: &'a str,
    notes: &'a str,
    items: &'a [ItemRow],
    grand_total: &'a str,
}

#[derive(Template)]
#[template(path = "email/order_customer.html")]
struct CustomerEmailHtml<'a> {
    order_ref: &'a str,
    placed_at: &'a str,
    name: &'a str,
    notes: &'a str,
    items: &'a [ItemRow],
    grand_total: &'a str,
    contact_email: &'a str,
    instagram: &'a str,
}

pub fn owner_email(config: &MailConfig, notice: &OrderNotice<'_>) -> Result<OutgoingEmail, NotificationError> {
    let customer = &notice.order.customer;
    let items = item_rows(notice.order);
    let grand_total = format_rand(notice.order.grand_total);

    let html_body = OwnerEmailHtml {
        order_ref: notice.order_ref,
        placed_at: notice.placed_at,
        client_ip: notice.client_ip,
        name: &customer.name,
        email: &customer.email,
        phone: &customer.phone,
        city: customer.city.as_deref().unwrap_or_default(),
        notes: customer.notes.as_deref().unwrap_or_default(),
        items: &items,
        grand_total: &grand_total,
    }
    .render()?;

    Ok(OutgoingEmail {
        from: Recipient::new(Some(config.order_from_name.clone()), &config.from_email),
        to: Recipient::new(None, &config.order_to_email),
        subject: format!("New {BRAND} Order - {} - {}", notice.order_ref, customer.name),
        html_body,
    })
}

pub fn customer_email(config: &MailConfig, notice: &OrderNotice<'_>) -> Result<OutgoingEmail, NotificationError> {
    let customer = &notice.order.customer;
    let items = item_rows(notice.order);
    let grand_total = format_rand(notice.order.grand_total);

    let html_body = CustomerEmailHtml {
        order_ref: notice.order_ref,
        placed_at: notice.placed_at,
        name: &customer.name,
        notes: customer.notes.as_deref().unwrap_or_default(),
        items: &items,
        grand_total: &grand_total,
        contact_email: CONTACT_EMAIL,
        instagram: INSTAGRAM_HANDLE,
    }
    .render()?;

    Ok(OutgoingEmail {
        from: Recipient::new(Some(config.from_name.clone()), &config.from_email),
        to: Recipient::new(Some(customer.name.clone()), &customer.email),
        subject: format!("Order Confirmation - {} - {BRAND}", notice.order_ref),
        html_body,
    })
}

/// Renders both emails before sending either, then sends owner first.
pub async fn dispatch_order_emails(
    mailer: &dyn Mailer,
    config: &MailConfig,
    notice: &OrderNotice<'_>,
) -> Result<(), NotificationError> {
    let owner = owner_email(config, notice)?;
    let customer = customer_email(config, notice)?;

    mailer.send(owner).await?;
    mailer.send(customer).await?;
    Ok(())
}

fn item_rows(order: &ValidatedOrder) -> Vec<ItemRow> {
    order
        .lines
        .iter()
        .map(|line| ItemRow {
            name: line.name.clone(),
            size: line.size.clone(),
            quantity: line.quantity,
            total: format_rand(line.total),
        })
        .collect()
}

/// `R1,280.00` style amounts.
pub fn format_rand(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}R{grouped}.{cents}")
}
