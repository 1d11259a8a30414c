use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

/// Body shared by color and size create/update.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct VariantRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
}
