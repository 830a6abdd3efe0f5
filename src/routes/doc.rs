use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{CartLineRequest, OrderRequest, OrderResponse},
        products::{CollectionList, ProductList},
    },
    models::{Product, Size},
    response::{ApiResponse, Meta},
    routes::{
        health::{self, HealthData, VersionData},
        orders, params,
        products as product_routes,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::version,
        orders::process_order,
        product_routes::list_products,
        product_routes::list_collections,
        product_routes::get_product,
    ),
    components(
        schemas(
            Product,
            Size,
            OrderRequest,
            CartLineRequest,
            OrderResponse,
            ProductList,
            CollectionList,
            HealthData,
            VersionData,
            params::Pagination,
            params::CatalogQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CollectionList>,
            ApiResponse<HealthData>,
            ApiResponse<VersionData>
        )
    ),
    tags(
        (name = "Health", description = "Health and version endpoints"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Order submission"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
