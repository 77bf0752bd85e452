#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{mint_access_token, verify_access_token, Claims};
pub use config::AppConfig;
pub use error::AppError;
pub use extractors::{DecodedIdentity, DocumentId, ValidatedJson};
pub use infra::db::connect_db;
pub use middleware::{cors_middleware, AccessGate, RequestTrace, StructuredLogger, TraceSpan};
pub use repos::Document;
pub use state::{AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
