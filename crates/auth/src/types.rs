//! Auth read-model types
//!
//! Lightweight view of the same DB row owned by the accounts domain,
//! carrying only the fields needed for authentication and authorization.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lightweight identity for authenticated users.
///
/// Handlers needing the full `User` record should load it from the
/// accounts domain repository.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
