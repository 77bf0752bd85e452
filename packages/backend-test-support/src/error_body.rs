use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::test;
use serde_json::{json, Value};

/// Assert a response is the uniform error shape.
///
/// Checks the status, that `x-trace-id` is present and matches
/// `x-request-id`, that the body is JSON, and that it is exactly
/// `{"error": true, "errorMessage": <message>}` with no extra fields.
pub async fn assert_error_body<B>(resp: ServiceResponse<B>, status: u16, message: &str)
where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), status, "unexpected status");

    let headers = resp.headers().clone();
    let trace_id = headers
        .get(HeaderName::from_static("x-trace-id"))
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present on error responses");
    assert!(!trace_id.is_empty(), "x-trace-id should not be empty");

    if let Some(request_id) = headers
        .get(HeaderName::from_static("x-request-id"))
        .and_then(|v| v.to_str().ok())
    {
        assert_eq!(trace_id, request_id, "x-trace-id should equal x-request-id");
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "error body should be JSON (got {content_type})"
    );

    let body = test::read_body(resp).await;
    let parsed: Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "error body should be JSON, got {}",
            String::from_utf8_lossy(&body)
        )
    });

    assert_eq!(parsed, json!({ "error": true, "errorMessage": message }));
}
