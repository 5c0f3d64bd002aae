//! Courier application composition root
//!
//! Composes all domain routers into a single application.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use courier_accounts::{AccountsRepositories, AccountsState};
use courier_auth::{AuthBackend, AuthConfig};
use courier_common::{Config, Error};
use courier_directory::{DirectoryClient, DirectoryConfig, DirectoryError, DirectoryServiceFactory};
use courier_conversations::{ConversationsRepositories, ConversationsState};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Auth backend shared by every protected route
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: std::env::var("JWT_ISSUER").ok(),
        audience: std::env::var("JWT_AUDIENCE").ok(),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Domain states
    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let conversations_state = ConversationsState {
        repos: ConversationsRepositories::new(pool),
        auth,
    };

    // Directory service from configuration ("github" or "mock")
    let directory_config = DirectoryConfig {
        provider: config.directory_provider.clone(),
        base_url: config.directory_base_url.clone(),
    };
    let directory = DirectoryClient::new(Arc::from(DirectoryServiceFactory::create(
        directory_config,
    )?));

    // Compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Courier API v0.1.0" }))
        .merge(courier_accounts::routes().with_state(accounts_state))
        .merge(courier_conversations::routes().with_state(conversations_state))
        .merge(directory_routes().with_state(directory));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Directory lookup routes
fn directory_routes() -> Router<DirectoryClient> {
    Router::new().route(
        "/v1/directory/orgs/{org}/repositories",
        get(list_org_repositories),
    )
}

#[derive(Debug, Deserialize)]
struct RepositoryFilter {
    license: Option<String>,
}

/// List an organization's public repository names, optionally filtered by
/// license key
async fn list_org_repositories(
    State(directory): State<DirectoryClient>,
    Path(org): Path<String>,
    Query(filter): Query<RepositoryFilter>,
) -> Result<Json<Vec<String>>, Error> {
    let names = directory
        .list_public_repositories(&org, filter.license.as_deref())
        .await
        .map_err(map_directory_error)?;

    Ok(Json(names))
}

fn map_directory_error(err: DirectoryError) -> Error {
    match err {
        DirectoryError::NotFound(msg) => Error::NotFound(msg),
        DirectoryError::Configuration(msg) => Error::Internal(msg),
        DirectoryError::Request(msg) | DirectoryError::Response(msg) => Error::Internal(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_maps_to_not_found() {
        let err = map_directory_error(DirectoryError::NotFound("no such org".to_string()));
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_directory_transport_errors_map_to_internal() {
        let err = map_directory_error(DirectoryError::Request("timeout".to_string()));
        assert!(matches!(err, Error::Internal(_)));

        let err = map_directory_error(DirectoryError::Response("bad json".to_string()));
        assert!(matches!(err, Error::Internal(_)));
    }
}
