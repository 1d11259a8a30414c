//! Field deserializers for request bodies. Clients send numbers as strings
//! and the reverse, so values are coerced instead of rejected; anything that
//! will not coerce becomes the field's empty value.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::orders::OrderLineRequest;

fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|v| as_text(v).unwrap_or_default())
}

pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Value::deserialize(deserializer).map(as_text)
}

pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Value::deserialize(deserializer).map(|v| as_number(&v))
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Value::deserialize(deserializer).map(|v| as_id(&v).unwrap_or_default())
}

pub fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Value::deserialize(deserializer).map(|v| as_id(&v))
}

/// Entries that are not ids are dropped.
pub fn id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i32>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(as_id).collect(),
        _ => Vec::new(),
    })
}

/// Entries that are not objects are dropped.
pub fn order_lines<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<OrderLineRequest>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::dto::{
        auth::RegisterRequest,
        orders::CreateOrderRequest,
        products::{AttachColorsRequest, ProductRequest},
    };

    #[test]
    fn numeric_strings_become_numbers() {
        let product: ProductRequest =
            serde_json::from_value(json!({ "title": "Tee", "price": " 10.5 " })).unwrap();
        assert_eq!(product.price, Some(10.5));

        let order: CreateOrderRequest = serde_json::from_value(json!({
            "user_id": "7",
            "products": [{ "product_id": "3", "qty": "2", "color_id": 1 }]
        }))
        .unwrap();
        assert_eq!(order.user_id, 7);
        assert_eq!(order.products[0].product_id, Some(3));
        assert_eq!(order.products[0].quantity, Some(2));
        assert_eq!(order.products[0].color_id, Some(1));
    }

    #[test]
    fn uncoercible_values_fall_back_to_empty() {
        let product: ProductRequest = serde_json::from_value(json!({
            "title": null,
            "description": ["x"],
            "price": "cheap"
        }))
        .unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.description, "");
        assert_eq!(product.price, None);

        let empty_price: ProductRequest = serde_json::from_value(json!({ "price": "" })).unwrap();
        assert_eq!(empty_price.price, None);

        let order: CreateOrderRequest =
            serde_json::from_value(json!({ "user_id": "abc", "products": "none" })).unwrap();
        assert_eq!(order.user_id, 0);
        assert!(order.products.is_empty());
    }

    #[test]
    fn scalars_become_text() {
        let register: RegisterRequest = serde_json::from_value(json!({
            "username": 42,
            "password": true,
            "role": {}
        }))
        .unwrap();
        assert_eq!(register.username, "42");
        assert_eq!(register.password, "true");
        assert_eq!(register.role, None);
    }

    #[test]
    fn id_lists_keep_only_ids() {
        let attach: AttachColorsRequest = serde_json::from_value(json!({
            "product_id": "1",
            "colors": [1, "2", "red", null, 3.5]
        }))
        .unwrap();
        assert_eq!(attach.product_id, 1);
        assert_eq!(attach.colors, vec![1, 2]);

        let order: CreateOrderRequest = serde_json::from_value(json!({
            "user_id": 1,
            "products": [5, { "product_id": 2 }]
        }))
        .unwrap();
        assert_eq!(order.products.len(), 1);
        assert_eq!(order.products[0].product_id, Some(2));
    }
}
