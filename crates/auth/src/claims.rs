//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by Courier access tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email, when the issuer includes it
    pub email: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
