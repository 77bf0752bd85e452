//! Access token claims and the request body that asks for them.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Claims carried by issued access tokens.
///
/// After verification the access gate stores this value in request
/// extensions; handlers read it through `DecodedIdentity`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Body of `POST /access-token`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AccessTokenRequest {
    #[serde(default)]
    pub email: String,
}

impl AccessTokenRequest {
    /// The trimmed email, if it looks like an address.
    pub fn validated_email(&self) -> Result<&str, DomainError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
            _ => Err(DomainError::validation("email must be an address")),
        }
    }
}
