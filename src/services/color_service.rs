use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::{
    dto::variants::VariantRequest,
    entity::colors::{ActiveModel, Entity as Colors},
    error::AppResult,
    response::Reply,
    state::AppState,
};

pub async fn create_color(state: &AppState, payload: VariantRequest) -> AppResult<Reply<()>> {
    let color = ActiveModel {
        id: NotSet,
        title: Set(payload.title),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(color_id = color.id, "color created");
    Ok(Reply::message("Color created"))
}

pub async fn update_color(
    state: &AppState,
    id: i32,
    payload: VariantRequest,
) -> AppResult<Reply<()>> {
    let existing = match Colors::find_by_id(id).one(&state.orm).await? {
        Some(c) => c,
        None => return Ok(Reply::message("Color not found")),
    };

    let mut active: ActiveModel = existing.into();
    active.title = Set(payload.title);
    active.update(&state.orm).await?;

    tracing::info!(color_id = id, "color updated");
    Ok(Reply::message("Color updated"))
}
