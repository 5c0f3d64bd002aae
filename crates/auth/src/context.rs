//! Authorization context for authenticated users

use crate::types::AuthIdentity;
use uuid::Uuid;

/// Represents an authenticated caller
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// The authenticated user's id
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Check whether this context belongs to the given user
    pub fn is_user(&self, user_id: Uuid) -> bool {
        self.user.id == user_id
    }
}
