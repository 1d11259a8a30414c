use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::order_items::Model as OrderItemModel;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductDetail {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub color_id: Option<i32>,
    pub size_id: Option<i32>,
}

impl From<OrderItemModel> for OrderItem {
    fn from(model: OrderItemModel) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
            color_id: model.color_id,
            size_id: model.size_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderDetail {
    pub user_id: i32,
    pub total: f64,
    pub ordered_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}
