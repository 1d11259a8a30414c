use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

/// Body of both product create and product update. Absent keys fall back to
/// empty values, so an update overwrites every column.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AttachColorsRequest {
    #[serde(deserialize_with = "lenient::id")]
    pub product_id: i32,
    #[serde(deserialize_with = "lenient::id_list")]
    pub colors: Vec<i32>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AttachSizesRequest {
    #[serde(deserialize_with = "lenient::id")]
    pub product_id: i32,
    #[serde(deserialize_with = "lenient::id_list")]
    pub sizes_id: Vec<i32>,
}
