//! Domain entities for the Accounts domain
//!
//! Each entity includes proper validation, serialization, and business rules.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use courier_common::{Error, Result};
use validator::ValidateEmail;

/// Maximum username length (varchar(150))
const MAX_USERNAME_LENGTH: usize = 150;

/// Maximum display name length (varchar(100))
const MAX_DISPLAY_NAME_LENGTH: usize = 100;

lazy_static! {
    /// Phone number validation regex: optional leading +, 7-15 digits
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
}

/// Validate a phone number in permissive E.164-style form
pub fn validate_phone_number(phone: &str) -> Result<()> {
    if !PHONE_NUMBER_REGEX.is_match(phone) {
        return Err(Error::Validation(
            "Phone number must be 7-15 digits with an optional leading +".to_string(),
        ));
    }
    Ok(())
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    pub fn new(
        email: String,
        username: String,
        display_name: Option<String>,
        phone_number: Option<String>,
    ) -> Result<Self> {
        // Validate email format (validator crate enforces RFC 5321 including length)
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        Self::validate_username(&username)?;

        if let Some(ref name) = display_name {
            if name.is_empty() || name.len() > MAX_DISPLAY_NAME_LENGTH {
                return Err(Error::Validation(format!(
                    "Display name must be 1-{} characters",
                    MAX_DISPLAY_NAME_LENGTH
                )));
            }
        }

        if let Some(ref phone) = phone_number {
            validate_phone_number(phone)?;
        }

        let now = Utc::now();
        Ok(User {
            id: Uuid::new_v4(),
            email,
            username,
            display_name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Validate username: non-empty, length-bounded, no whitespace
    fn validate_username(username: &str) -> Result<()> {
        if username.is_empty() || username.len() > MAX_USERNAME_LENGTH {
            return Err(Error::Validation(format!(
                "Username must be 1-{} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        if username.chars().any(char::is_whitespace) {
            return Err(Error::Validation(
                "Username cannot contain whitespace".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation_minimal() {
        let user = User::new(
            "ada@example.com".to_string(),
            "ada".to_string(),
            None,
            None,
        )
        .unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.username, "ada");
        assert!(user.display_name.is_none());
        assert!(user.phone_number.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_creation_all_fields() {
        let user = User::new(
            "ada@example.com".to_string(),
            "ada".to_string(),
            Some("Ada Lovelace".to_string()),
            Some("+4420794600".to_string()),
        )
        .unwrap();

        assert_eq!(user.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(user.phone_number.as_deref(), Some("+4420794600"));
    }

    #[test]
    fn test_user_invalid_email_rejected() {
        let result = User::new("not-an-email".to_string(), "ada".to_string(), None, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid email format"));
    }

    #[test]
    fn test_user_empty_username_rejected() {
        let result = User::new("ada@example.com".to_string(), "".to_string(), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_username_with_whitespace_rejected() {
        let result = User::new(
            "ada@example.com".to_string(),
            "ada lovelace".to_string(),
            None,
            None,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("whitespace"));
    }

    #[test]
    fn test_user_username_150_chars_valid() {
        let username = "a".repeat(150);
        let result = User::new(
            "ada@example.com".to_string(),
            username.clone(),
            None,
            None,
        );
        assert!(result.is_ok());
        assert_eq!(result.unwrap().username, username);
    }

    #[test]
    fn test_user_username_151_chars_rejected() {
        let username = "a".repeat(151);
        let result = User::new("ada@example.com".to_string(), username, None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_empty_display_name_rejected() {
        let result = User::new(
            "ada@example.com".to_string(),
            "ada".to_string(),
            Some("".to_string()),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_user_display_name_101_chars_rejected() {
        let result = User::new(
            "ada@example.com".to_string(),
            "ada".to_string(),
            Some("a".repeat(101)),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_phone_number_valid_forms() {
        assert!(validate_phone_number("2079460000").is_ok());
        assert!(validate_phone_number("+442079460000").is_ok());
    }

    #[test]
    fn test_phone_number_invalid_forms() {
        assert!(validate_phone_number("123").is_err());
        assert!(validate_phone_number("not-a-phone").is_err());
        assert!(validate_phone_number("+44 20 7946").is_err());
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = User::new(
            "ada@example.com".to_string(),
            "ada".to_string(),
            Some("Ada".to_string()),
            None,
        )
        .unwrap();

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();

        assert_eq!(user, deserialized);
    }
}
