use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, RegisterRequest},
        orders::{CreateOrderRequest, OrderLineRequest},
        products::{AttachColorsRequest, AttachSizesRequest, ProductRequest},
        variants::VariantRequest,
    },
    models::{OrderDetail, OrderItem, ProductDetail},
    routes::{auth, colors, health, orders, products, sizes},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        products::create_product,
        products::get_product,
        products::update_product,
        products::attach_colors,
        products::attach_sizes,
        colors::create_color,
        colors::update_color,
        sizes::create_size,
        sizes::update_size,
        orders::create_order,
        orders::get_order
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            ProductRequest,
            AttachColorsRequest,
            AttachSizesRequest,
            VariantRequest,
            CreateOrderRequest,
            OrderLineRequest,
            ProductDetail,
            OrderDetail,
            OrderItem,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Colors", description = "Color variant endpoints"),
        (name = "Sizes", description = "Size variant endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
