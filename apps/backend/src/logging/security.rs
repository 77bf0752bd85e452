use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A request was turned away by the access gate.
pub fn access_denied(path: &str, reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        path,
        reason,
        "Access denied"
    );
}

/// An access token was minted for `email`.
pub fn token_issued(email: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_TOKEN_ISSUED",
        %trace_id,
        email = %Redacted(email),
        "Access token issued"
    );
}
