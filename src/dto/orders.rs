use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateOrderRequest {
    #[serde(deserialize_with = "lenient::id")]
    pub user_id: i32,
    #[serde(deserialize_with = "lenient::order_lines")]
    pub products: Vec<OrderLineRequest>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderLineRequest {
    #[serde(deserialize_with = "lenient::opt_id")]
    pub product_id: Option<i32>,
    #[serde(alias = "qty", deserialize_with = "lenient::opt_id")]
    pub quantity: Option<i32>,
    #[serde(deserialize_with = "lenient::opt_id")]
    pub color_id: Option<i32>,
    #[serde(deserialize_with = "lenient::opt_id")]
    pub size_id: Option<i32>,
}
