//! User management API handlers
//!
//! Implements user operations including:
//! - POST /v1/users - Register a new user
//! - GET /v1/users - List users (participant discovery)
//! - GET /v1/account - Get current user profile
//! - PATCH /v1/account - Update user profile

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use courier_auth::AuthUser;
use courier_common::{Error, Pagination, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::entities::{validate_phone_number, User};

/// Request for registering a user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 150))]
    pub username: String,

    pub display_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Request for updating the caller's profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,

    pub phone_number: Option<String>,
}

/// User response DTO
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            phone_number: user.phone_number,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Register a new user
pub async fn register_user(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = User::new(req.email, req.username, req.display_name, req.phone_number)?;

    if state.repos.users.find_by_email(&user.email).await?.is_some() {
        return Err(Error::Conflict("Email already registered".to_string()));
    }

    if state
        .repos
        .users
        .find_by_username(&user.username)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("Username already taken".to_string()));
    }

    let created = state.repos.users.create(&user).await?;

    tracing::info!(user_id = %created.id, username = %created.username, "User registered");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List users (newest first, paginated)
pub async fn list_users(
    AuthUser(_ctx): AuthUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state
        .repos
        .users
        .list(pagination.offset(), pagination.limit())
        .await?;

    let responses: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}

/// Get the authenticated caller's profile
pub async fn get_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(ctx.user.id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}

/// Update the authenticated caller's profile
pub async fn update_account(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<UpdateAccountRequest>,
) -> Result<Json<UserResponse>> {
    if let Some(ref phone) = req.phone_number {
        validate_phone_number(phone)?;
    }

    let updated = state
        .repos
        .users
        .update_profile(ctx.user.id, req.display_name, req.phone_number)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(updated.into()))
}
