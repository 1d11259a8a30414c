use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::{
    dto::variants::VariantRequest,
    entity::sizes::{ActiveModel, Entity as Sizes},
    error::AppResult,
    response::Reply,
    state::AppState,
};

pub async fn create_size(state: &AppState, payload: VariantRequest) -> AppResult<Reply<()>> {
    let size = ActiveModel {
        id: NotSet,
        title: Set(payload.title),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(size_id = size.id, "size created");
    Ok(Reply::message("Size created"))
}

pub async fn update_size(
    state: &AppState,
    id: i32,
    payload: VariantRequest,
) -> AppResult<Reply<()>> {
    let existing = match Sizes::find_by_id(id).one(&state.orm).await? {
        Some(s) => s,
        None => return Ok(Reply::message("Size not found")),
    };

    let mut active: ActiveModel = existing.into();
    active.title = Set(payload.title);
    active.update(&state.orm).await?;

    tracing::info!(size_id = id, "size updated");
    Ok(Reply::message("Size updated"))
}
