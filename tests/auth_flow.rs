mod common;

use mogofy_api::{
    dto::auth::{LoginRequest, RegisterRequest},
    entity::{Users, users},
    services::auth_service::{login_user, register_user},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

fn register(username: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.into(),
        password: password.into(),
        role: None,
    }
}

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_stores_hashed_password_and_default_role() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let reply = register_user(&state, register("alice", "s3cret")).await?;
    assert_eq!(reply.as_message(), Some("User registered"));

    let user = Users::find()
        .filter(users::Column::Username.eq("alice"))
        .one(&state.orm)
        .await?
        .expect("user row");
    assert_ne!(user.password_hash, "s3cret");
    assert_eq!(user.role, "user");
    assert!(user.deleted_at.is_none());
    Ok(())
}

#[tokio::test]
async fn register_keeps_explicit_role() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let mut payload = register("root", "pw");
    payload.role = Some("admin".into());
    register_user(&state, payload).await?;

    let user = Users::find()
        .filter(users::Column::Username.eq("root"))
        .one(&state.orm)
        .await?
        .expect("user row");
    assert_eq!(user.role, "admin");
    Ok(())
}

#[tokio::test]
async fn register_rejects_usernames_over_fifty_chars() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let reply = register_user(&state, register(&"a".repeat(51), "pw")).await?;
    assert_eq!(
        reply.as_message(),
        Some("Username must be at most 50 characters")
    );
    assert_eq!(Users::find().count(&state.orm).await?, 0);

    let reply = register_user(&state, register(&"b".repeat(50), "pw")).await?;
    assert_eq!(reply.as_message(), Some("User registered"));
    assert_eq!(Users::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn username_length_counts_characters_not_bytes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    // 50 two-byte characters.
    let reply = register_user(&state, register(&"é".repeat(50), "pw")).await?;
    assert_eq!(reply.as_message(), Some("User registered"));
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_a_database_error() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    register_user(&state, register("bob", "one")).await?;
    let second = register_user(&state, register("bob", "two")).await;
    assert!(second.is_err());
    assert_eq!(Users::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn login_outcomes() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    register_user(&state, register("carol", "correct horse")).await?;

    let ok = login_user(&state, login("carol", "correct horse")).await?;
    assert_eq!(ok.as_message(), Some("Login successful"));

    let wrong = login_user(&state, login("carol", "battery staple")).await?;
    assert_eq!(wrong.as_message(), Some("Invalid password"));

    let unknown = login_user(&state, login("dave", "whatever")).await?;
    assert_eq!(unknown.as_message(), Some("User not found"));
    Ok(())
}
