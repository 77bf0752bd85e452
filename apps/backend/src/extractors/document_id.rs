use std::fmt;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Length of a document id: 12 bytes, hex encoded.
pub const DOCUMENT_ID_LEN: usize = 24;

/// Document id taken from the `{id}` route segment.
///
/// Only well-formed ids get this far; they are normalized to lowercase hex
/// so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.len() == DOCUMENT_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(AppError::bad_request(
                ErrorCode::InvalidDocumentId,
                "invalid document id",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for DocumentId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.match_info().get("id") {
            Some(raw) => DocumentId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidDocumentId,
                "invalid document id",
            )),
        })
    }
}
