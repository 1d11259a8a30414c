mod common;

use mogofy_api::{
    dto::{
        products::{AttachColorsRequest, AttachSizesRequest, ProductRequest},
        variants::VariantRequest,
    },
    entity::{Colors, ProductColors, ProductSizes, Products, Sizes},
    models::ProductDetail,
    services::{color_service, product_service, size_service},
};
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};

#[tokio::test]
async fn create_then_read_product_round_trips_fields() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    common::create_product(&state, "Tee", "Plain cotton tee", Some(10.0)).await?;

    let detail = product_service::get_product(&state, 1)
        .await?
        .into_json()
        .expect("product detail");
    assert_eq!(
        detail,
        ProductDetail {
            title: "Tee".into(),
            description: "Plain cotton tee".into(),
            price: Some(10.0),
            colors: vec![],
            sizes: vec![],
        }
    );
    Ok(())
}

#[tokio::test]
async fn unknown_product_reads_as_not_found_message() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let reply = product_service::get_product(&state, 42).await?;
    assert_eq!(reply.as_message(), Some("Product not found"));
    Ok(())
}

#[tokio::test]
async fn update_overwrites_every_field() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_product(&state, "Tee", "Plain cotton tee", Some(10.0)).await?;

    let reply = product_service::update_product(
        &state,
        1,
        ProductRequest {
            title: "Tee v2".into(),
            description: String::new(),
            price: None,
        },
    )
    .await?;
    assert_eq!(reply.as_message(), Some("Product updated"));

    let detail = product_service::get_product(&state, 1)
        .await?
        .into_json()
        .expect("product detail");
    assert_eq!(detail.title, "Tee v2");
    assert_eq!(detail.description, "");
    assert_eq!(detail.price, None);
    Ok(())
}

#[tokio::test]
async fn update_unknown_product_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let reply = product_service::update_product(&state, 7, ProductRequest::default()).await?;
    assert_eq!(reply.as_message(), Some("Product not found"));
    Ok(())
}

#[tokio::test]
async fn attaching_colors_skips_unknown_ids() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_product(&state, "Tee", "Plain", Some(10.0)).await?;
    common::create_color(&state, "red").await?;
    common::create_color(&state, "blue").await?;

    let reply = product_service::attach_colors(
        &state,
        AttachColorsRequest {
            product_id: 1,
            colors: vec![1, 2, 99],
        },
    )
    .await?;
    assert_eq!(reply.as_message(), Some("Attached 2 colors to product 1"));
    assert_eq!(ProductColors::find().count(&state.orm).await?, 2);

    let detail = product_service::get_product(&state, 1)
        .await?
        .into_json()
        .expect("product detail");
    assert_eq!(detail.colors, vec!["red".to_string(), "blue".to_string()]);
    Ok(())
}

#[tokio::test]
async fn attaching_the_same_color_twice_stores_one_link() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_product(&state, "Tee", "Plain", Some(10.0)).await?;
    common::create_color(&state, "red").await?;

    let first = product_service::attach_colors(
        &state,
        AttachColorsRequest {
            product_id: 1,
            colors: vec![1, 1],
        },
    )
    .await?;
    assert_eq!(first.as_message(), Some("Attached 1 colors to product 1"));

    let again = product_service::attach_colors(
        &state,
        AttachColorsRequest {
            product_id: 1,
            colors: vec![1],
        },
    )
    .await?;
    assert_eq!(again.as_message(), Some("Attached 0 colors to product 1"));
    assert_eq!(ProductColors::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn attaching_to_unknown_product_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_color(&state, "red").await?;
    common::create_size(&state, "M").await?;

    let colors = product_service::attach_colors(
        &state,
        AttachColorsRequest {
            product_id: 5,
            colors: vec![1],
        },
    )
    .await?;
    assert_eq!(colors.as_message(), Some("Product not found"));

    let sizes = product_service::attach_sizes(
        &state,
        AttachSizesRequest {
            product_id: 5,
            sizes_id: vec![1],
        },
    )
    .await?;
    assert_eq!(sizes.as_message(), Some("Product not found"));
    assert_eq!(ProductColors::find().count(&state.orm).await?, 0);
    assert_eq!(ProductSizes::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn attaching_sizes_uses_the_requested_ids() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_product(&state, "Tee", "Plain", Some(10.0)).await?;
    common::create_size(&state, "S").await?;
    common::create_size(&state, "M").await?;
    common::create_size(&state, "L").await?;

    let reply = product_service::attach_sizes(
        &state,
        AttachSizesRequest {
            product_id: 1,
            sizes_id: vec![2, 3, 40],
        },
    )
    .await?;
    assert_eq!(reply.as_message(), Some("Attached 2 sizes to product 1"));

    let detail = product_service::get_product(&state, 1)
        .await?
        .into_json()
        .expect("product detail");
    assert_eq!(detail.sizes, vec!["M".to_string(), "L".to_string()]);
    Ok(())
}

#[tokio::test]
async fn colors_and_sizes_create_and_update() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let created = color_service::create_color(&state, VariantRequest { title: "red".into() }).await?;
    assert_eq!(created.as_message(), Some("Color created"));
    let updated = color_service::update_color(&state, 1, VariantRequest { title: "crimson".into() })
        .await?;
    assert_eq!(updated.as_message(), Some("Color updated"));
    let color = Colors::find_by_id(1).one(&state.orm).await?.expect("color");
    assert_eq!(color.title, "crimson");
    let missing = color_service::update_color(&state, 9, VariantRequest::default()).await?;
    assert_eq!(missing.as_message(), Some("Color not found"));

    let created = size_service::create_size(&state, VariantRequest { title: "M".into() }).await?;
    assert_eq!(created.as_message(), Some("Size created"));
    let updated = size_service::update_size(&state, 1, VariantRequest::default()).await?;
    assert_eq!(updated.as_message(), Some("Size updated"));
    let size = Sizes::find_by_id(1).one(&state.orm).await?.expect("size");
    assert_eq!(size.title, "");
    let missing = size_service::update_size(&state, 9, VariantRequest::default()).await?;
    assert_eq!(missing.as_message(), Some("Size not found"));
    Ok(())
}

#[tokio::test]
async fn duplicate_color_titles_are_allowed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_color(&state, "red").await?;
    common::create_color(&state, "red").await?;
    assert_eq!(Colors::find().count(&state.orm).await?, 2);
    Ok(())
}

#[tokio::test]
async fn join_rows_resolve_both_sides() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::create_product(&state, "Tee", "Plain", Some(10.0)).await?;
    common::create_color(&state, "red").await?;
    common::create_size(&state, "M").await?;
    product_service::attach_colors(
        &state,
        AttachColorsRequest {
            product_id: 1,
            colors: vec![1],
        },
    )
    .await?;
    product_service::attach_sizes(
        &state,
        AttachSizesRequest {
            product_id: 1,
            sizes_id: vec![1],
        },
    )
    .await?;

    let color_link = ProductColors::find().one(&state.orm).await?.expect("color link");
    let product = color_link.find_related(Products).one(&state.orm).await?;
    let color = color_link.find_related(Colors).one(&state.orm).await?;
    assert_eq!(product.map(|p| p.title).as_deref(), Some("Tee"));
    assert_eq!(color.map(|c| c.title).as_deref(), Some("red"));

    let size_link = ProductSizes::find().one(&state.orm).await?.expect("size link");
    let product = size_link.find_related(Products).one(&state.orm).await?;
    let size = size_link.find_related(Sizes).one(&state.orm).await?;
    assert_eq!(product.map(|p| p.id), Some(1));
    assert_eq!(size.map(|s| s.title).as_deref(), Some("M"));
    Ok(())
}
