use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderLineRequest},
    entity::{
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems},
        orders::{ActiveModel as OrderActive, Entity as Orders},
        products::Entity as Products,
    },
    error::AppResult,
    models::{OrderDetail, OrderItem},
    response::Reply,
    state::AppState,
};

/// Places an order. The total is pinned here and never recomputed. Lines
/// whose product does not resolve add nothing to the total but are still
/// stored as items. `user_id` is stored as given, registered or not.
pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Reply<()>> {
    let CreateOrderRequest { user_id, products } = payload;
    let txn = state.orm.begin().await?;

    let total = order_total(&txn, &products).await?;

    let order = OrderActive {
        id: NotSet,
        user_id: Set(user_id),
        coupon_code: Set(None),
        total: Set(total),
        ordered_at: Set(Utc::now()),
        cancelled_at: Set(None),
    }
    .insert(&txn)
    .await?;

    for line in &products {
        OrderItemActive {
            id: NotSet,
            order_id: Set(order.id),
            product_id: Set(line.product_id),
            quantity: Set(line.quantity),
            color_id: Set(line.color_id),
            size_id: Set(line.size_id),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::info!(
        order_id = order.id,
        user_id,
        total,
        items = products.len(),
        "order created"
    );
    Ok(Reply::message(format!("Order created with id {}", order.id)))
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Reply<OrderDetail>> {
    let order = match Orders::find_by_id(id).one(&state.orm).await? {
        Some(o) => o,
        None => return Ok(Reply::message("Order not found")),
    };

    let items = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .order_by_asc(OrderItemCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(Reply::Json(OrderDetail {
        user_id: order.user_id,
        total: order.total,
        ordered_at: order.ordered_at,
        items,
    }))
}

async fn order_total<C: ConnectionTrait>(conn: &C, lines: &[OrderLineRequest]) -> AppResult<f64> {
    let mut total = 0.0;
    for line in lines {
        let Some(product_id) = line.product_id else {
            continue;
        };
        match Products::find_by_id(product_id).one(conn).await? {
            Some(product) => total += line_amount(product.price, line.quantity),
            None => tracing::debug!(product_id, "order line references unknown product"),
        }
    }
    Ok(total)
}

fn line_amount(price: Option<f64>, quantity: Option<i32>) -> f64 {
    price.unwrap_or(0.0) * f64::from(quantity.unwrap_or(0))
}
