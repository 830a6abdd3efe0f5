use axum::{
    Json, Router,
    extract::{Path, Query},
    routing::get,
};

use crate::{
    catalog,
    dto::products::{CollectionList, ProductList},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::CatalogQuery,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/collections", get(list_collections))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("collection" = Option<String>, Query, description = "Only products from this collection"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(Query(query): Query<CatalogQuery>) -> Json<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let matching: Vec<Product> = match query.collection.as_deref().filter(|c| !c.is_empty()) {
        Some(collection) => catalog::by_collection(collection).copied().collect(),
        None => catalog::products().to_vec(),
    };
    let total = matching.len() as i64;

    let items = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Json(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/products/collections",
    responses(
        (status = 200, description = "Collection labels in catalog order", body = ApiResponse<CollectionList>)
    ),
    tag = "Products"
)]
pub async fn list_collections() -> Json<ApiResponse<CollectionList>> {
    let items = catalog::collections().into_iter().map(String::from).collect();
    Json(ApiResponse::success(
        "Collections",
        CollectionList { items },
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = u32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 404, description = "Unknown product"),
    ),
    tag = "Products"
)]
pub async fn get_product(Path(id): Path<u32>) -> AppResult<Json<ApiResponse<Product>>> {
    let product = catalog::find(id).ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("OK", *product, Some(Meta::empty()))))
}
