use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::Utc;
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users},
    error::{AppError, AppResult},
    response::Reply,
    state::AppState,
};

pub const MAX_USERNAME_CHARS: usize = 50;
pub const DEFAULT_ROLE: &str = "user";

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<Reply<()>> {
    let RegisterRequest {
        username,
        password,
        role,
    } = payload;

    if username.chars().count() > MAX_USERNAME_CHARS {
        tracing::warn!(len = username.chars().count(), "username too long");
        return Ok(Reply::message(format!(
            "Username must be at most {MAX_USERNAME_CHARS} characters"
        )));
    }

    let password_hash = hash_password(&password)?;
    let now = Utc::now();

    // Uniqueness is left to the users.username constraint.
    let user = UserActive {
        id: NotSet,
        username: Set(username),
        password_hash: Set(password_hash),
        role: Set(role.unwrap_or_else(|| DEFAULT_ROLE.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "user registered");
    Ok(Reply::message("User registered"))
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<Reply<()>> {
    let LoginRequest { username, password } = payload;
    let user = Users::find()
        .filter(UserCol::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => return Ok(Reply::message("User not found")),
    };

    if !verify_password(&password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "login rejected");
        return Ok(Reply::message("Invalid password"));
    }

    tracing::info!(user_id = user.id, "user logged in");
    Ok(Reply::message("Login successful"))
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
