use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::claims::AccessTokenRequest;
use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode};
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::routes::fallback::method_not_allowed;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub token: String,
}

/// Issue a one-hour access token for the supplied email.
async fn issue_access_token(
    body: ValidatedJson<AccessTokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let email = request.validated_email().map_err(|e| match e {
        DomainError::Validation(detail) => AppError::bad_request(ErrorCode::InvalidEmail, detail),
        other => AppError::from(other),
    })?;

    let token = mint_access_token(email, SystemTime::now(), &app_state.security)?;
    security::token_issued(email);

    Ok(HttpResponse::Ok().json(AccessTokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/access-token")
            .route(web::post().to(issue_access_token))
            .default_service(web::to(method_not_allowed)),
    );
}
