//! Error codes for the Taste Trackers backend.
//!
//! Codes never reach the response body (the wire shape is fixed to
//! `{error, errorMessage}`); they tag log lines so failures can be grouped.
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, each mapping to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Access gate
    /// No usable credential on a protected route
    Unauthorized,
    /// Credential present but invalid or expired
    Forbidden,

    // Request Validation
    /// Request body could not be parsed
    BadRequest,
    /// Request body parsed but failed validation
    ValidationError,
    /// Email missing or malformed in a token request
    InvalidEmail,
    /// Path id is not a 24-hex object id
    InvalidDocumentId,

    // Resource Not Found
    /// No document with the requested id
    DocumentNotFound,
    /// No route matches the request path
    RouteNotFound,
    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored document does not have the expected shape
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",

            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidDocumentId => "INVALID_DOCUMENT_ID",

            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
