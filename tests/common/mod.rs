#![allow(dead_code)]

use mogofy_api::{
    db::{create_orm_conn, run_migrations},
    dto::{products::ProductRequest, variants::VariantRequest},
    services::{color_service, product_service, size_service},
    state::AppState,
};

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn create_product(
    state: &AppState,
    title: &str,
    description: &str,
    price: Option<f64>,
) -> anyhow::Result<()> {
    product_service::create_product(
        state,
        ProductRequest {
            title: title.into(),
            description: description.into(),
            price,
        },
    )
    .await?;
    Ok(())
}

pub async fn create_color(state: &AppState, title: &str) -> anyhow::Result<()> {
    color_service::create_color(state, VariantRequest { title: title.into() }).await?;
    Ok(())
}

pub async fn create_size(state: &AppState, title: &str) -> anyhow::Result<()> {
    size_service::create_size(state, VariantRequest { title: title.into() }).await?;
    Ok(())
}
