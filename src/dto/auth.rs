use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::lenient;

#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(deserialize_with = "lenient::text")]
    pub password: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(deserialize_with = "lenient::text")]
    pub password: String,
}
