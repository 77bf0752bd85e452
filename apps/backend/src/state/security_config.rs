use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Lifetime of an issued access token.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Signing settings for access tokens, immutable after startup.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret used to sign and verify access tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (HS256)
    pub algorithm: Algorithm,
    /// How long an issued token stays valid
    pub access_token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: ACCESS_TOKEN_TTL,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
