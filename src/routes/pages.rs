use askama::Template;
use axum::response::Html;

use crate::{
    catalog,
    error::AppResult,
    models::{Product, Size},
    services::notification_service::{CONTACT_EMAIL, INSTAGRAM_HANDLE},
};

struct CollectionSection {
    label: &'static str,
    products: Vec<&'static Product>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct LandingPage {
    sections: Vec<CollectionSection>,
    sizes: Vec<&'static str>,
    contact_email: &'static str,
    instagram: &'static str,
}

/// Landing page with the catalog grouped by collection.
pub async fn landing_page() -> AppResult<Html<String>> {
    let sections = catalog::collections()
        .into_iter()
        .map(|label| CollectionSection {
            label,
            products: catalog::by_collection(label).collect(),
        })
        .collect();

    let page = LandingPage {
        sections,
        sizes: Size::ALL.iter().map(Size::as_str).collect(),
        contact_email: CONTACT_EMAIL,
        instagram: INSTAGRAM_HANDLE,
    };
    let html = page.render().map_err(anyhow::Error::from)?;
    Ok(Html(html))
}
