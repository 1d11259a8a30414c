use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{
    dto::products::{AttachColorsRequest, AttachSizesRequest, ProductRequest},
    entity::{
        colors::{Column as ColorCol, Entity as Colors},
        product_colors::{
            ActiveModel as ProductColorActive, Column as ProductColorCol, Entity as ProductColors,
        },
        product_sizes::{
            ActiveModel as ProductSizeActive, Column as ProductSizeCol, Entity as ProductSizes,
        },
        products::{ActiveModel, Entity as Products},
        sizes::{Column as SizeCol, Entity as Sizes},
    },
    error::AppResult,
    models::ProductDetail,
    response::Reply,
    state::AppState,
};

pub const NOT_FOUND: &str = "Product not found";

pub async fn create_product(state: &AppState, payload: ProductRequest) -> AppResult<Reply<()>> {
    let now = Utc::now();
    let product = ActiveModel {
        id: NotSet,
        title: Set(payload.title),
        description: Set(payload.description),
        price: Set(payload.price),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(Reply::message("Product created"))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Reply<ProductDetail>> {
    let product = match Products::find_by_id(id).one(&state.orm).await? {
        Some(p) => p,
        None => return Ok(Reply::message(NOT_FOUND)),
    };

    let colors = product
        .find_related(Colors)
        .order_by_asc(ColorCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|c| c.title)
        .collect();

    let sizes = product
        .find_related(Sizes)
        .order_by_asc(SizeCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|s| s.title)
        .collect();

    Ok(Reply::Json(ProductDetail {
        title: product.title,
        description: product.description,
        price: product.price,
        colors,
        sizes,
    }))
}

/// Overwrites every editable column. Keys missing from the request become
/// empty strings or a null price instead of keeping the stored value.
pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductRequest,
) -> AppResult<Reply<()>> {
    let existing = match Products::find_by_id(id).one(&state.orm).await? {
        Some(p) => p,
        None => return Ok(Reply::message(NOT_FOUND)),
    };

    let mut active: ActiveModel = existing.into();
    active.title = Set(payload.title);
    active.description = Set(payload.description);
    active.price = Set(payload.price);
    active.updated_at = Set(Utc::now());
    let product = active.update(&state.orm).await?;

    tracing::info!(product_id = product.id, "product updated");
    Ok(Reply::message("Product updated"))
}

pub async fn attach_colors(
    state: &AppState,
    payload: AttachColorsRequest,
) -> AppResult<Reply<()>> {
    let AttachColorsRequest { product_id, colors } = payload;
    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Ok(Reply::message(NOT_FOUND));
    }

    let mut attached: u64 = 0;
    for color_id in colors {
        if Colors::find_by_id(color_id).one(&state.orm).await?.is_none() {
            tracing::debug!(product_id, color_id, "skipping unknown color");
            continue;
        }
        let link = ProductColorActive {
            product_id: Set(product_id),
            color_id: Set(color_id),
        };
        // An already attached pair hits the conflict clause and counts as zero.
        attached += ProductColors::insert(link)
            .on_conflict(
                OnConflict::columns([ProductColorCol::ProductId, ProductColorCol::ColorId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&state.orm)
            .await?;
    }

    tracing::info!(product_id, attached, "colors attached");
    Ok(Reply::message(format!(
        "Attached {attached} colors to product {product_id}"
    )))
}

pub async fn attach_sizes(state: &AppState, payload: AttachSizesRequest) -> AppResult<Reply<()>> {
    let AttachSizesRequest {
        product_id,
        sizes_id,
    } = payload;
    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Ok(Reply::message(NOT_FOUND));
    }

    let mut attached: u64 = 0;
    for size_id in sizes_id {
        if Sizes::find_by_id(size_id).one(&state.orm).await?.is_none() {
            tracing::debug!(product_id, size_id, "skipping unknown size");
            continue;
        }
        let link = ProductSizeActive {
            product_id: Set(product_id),
            size_id: Set(size_id),
        };
        attached += ProductSizes::insert(link)
            .on_conflict(
                OnConflict::columns([ProductSizeCol::ProductId, ProductSizeCol::SizeId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&state.orm)
            .await?;
    }

    tracing::info!(product_id, attached, "sizes attached");
    Ok(Reply::message(format!(
        "Attached {attached} sizes to product {product_id}"
    )))
}
