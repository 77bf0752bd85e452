use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Claims the access gate verified for this request.
///
/// Only available on routes wrapped in `AccessGate`; anywhere else the
/// extractor fails with 401.
#[derive(Debug, Clone)]
pub struct DecodedIdentity {
    pub claims: Claims,
}

impl Deref for DecodedIdentity {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.claims
    }
}

impl FromRequest for DecodedIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .cloned()
                .map(|claims| DecodedIdentity { claims })
                .ok_or_else(AppError::unauthorized),
        )
    }
}
