//! User repository

use crate::domain::entities::User;
use courier_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// Concurrent registrations can slip past the pre-insert lookups; a
/// unique-constraint violation on insert is still a 409, not a 500.
fn map_insert_error(e: sqlx::Error) -> Error {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            Error::Conflict("Email or username already taken".to_string())
        }
        _ => Error::Database(e),
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user
    pub async fn create(&self, user: &User) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                id, email, username, display_name, phone_number,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, email, username, display_name, phone_number,
                      created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(&user.phone_number)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(created)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, display_name, phone_number,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, display_name, phone_number,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, display_name, phone_number,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List users, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, display_name, phone_number,
                   created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Update user profile; omitted fields are left unchanged
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        display_name: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                display_name = COALESCE($2, display_name),
                phone_number = COALESCE($3, phone_number),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, username, display_name, phone_number,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(display_name)
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[derive(Debug)]
    struct DuplicateKeyError;

    impl std::fmt::Display for DuplicateKeyError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "duplicate key value violates unique constraint")
        }
    }

    impl std::error::Error for DuplicateKeyError {}

    impl sqlx::error::DatabaseError for DuplicateKeyError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    #[test]
    fn test_insert_unique_violation_maps_to_conflict() {
        let err = map_insert_error(sqlx::Error::Database(Box::new(DuplicateKeyError)));

        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_insert_other_errors_stay_database_errors() {
        let err = map_insert_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, Error::Database(_)));
    }
}
