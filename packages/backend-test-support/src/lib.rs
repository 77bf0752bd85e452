//! Shared helpers for backend unit and integration tests.

pub mod error_body;
pub mod logging;

pub use error_body::assert_error_body;
