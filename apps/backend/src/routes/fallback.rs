use actix_web::HttpResponse;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Default service for paths no resource matches.
pub async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::RouteNotFound, "route not found"))
}

/// Default service for a known resource hit with an unsupported method.
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::method_not_allowed())
}
