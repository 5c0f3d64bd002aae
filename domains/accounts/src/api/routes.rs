//! Route definitions for Accounts domain API

use axum::{routing::get, Router};

use super::handlers::users;
use super::middleware::AccountsState;

/// Create user management routes
fn user_routes() -> Router<AccountsState> {
    Router::new().route(
        "/v1/users",
        get(users::list_users).post(users::register_user),
    )
}

/// Create account profile routes
fn account_routes() -> Router<AccountsState> {
    Router::new().route(
        "/v1/account",
        get(users::get_account).patch(users::update_account),
    )
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new().merge(user_routes()).merge(account_routes())
}
