//! Bearer-token gate for protected routes.
//!
//! A request passes only when `Authorization` carries a token that verifies
//! against the shared secret. Missing credentials yield 401, credentials that
//! fail verification yield 403, and in both cases the wrapped handler never
//! runs. Verified claims are left in request extensions for
//! `DecodedIdentity`.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct AccessGate;

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessGateMiddleware<S> {
    service: Rc<S>,
}

/// Take the token from an `Authorization` value.
///
/// The value is split on whitespace and the second segment is the token;
/// the scheme word itself is not checked. Returns `None` when the header is
/// absent, not visible ASCII, or has no second segment.
pub fn extract_credential(value: Option<&HeaderValue>) -> Option<String> {
    value?
        .to_str()
        .ok()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path().to_string();

            let Some(token) = extract_credential(req.headers().get(header::AUTHORIZATION)) else {
                security::access_denied(&path, "missing_credential");
                return Ok(reject(req, AppError::unauthorized()));
            };

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                return Ok(reject(req, AppError::internal("AppState not registered")));
            };

            match verify_access_token(&token, &state.security) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(reason) => {
                    security::access_denied(&path, &reason.to_string());
                    Ok(reject(req, AppError::from(reason)))
                }
            }
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    req.error_response(err).map_into_right_body()
}
