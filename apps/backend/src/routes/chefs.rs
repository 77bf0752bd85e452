use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{DecodedIdentity, DocumentId};
use crate::logging::pii::Redacted;
use crate::middleware::AccessGate;
use crate::repos::chefs;
use crate::routes::fallback::method_not_allowed;
use crate::state::app_state::AppState;

/// GET /bestChefs - every chef document, public.
async fn list_best_chefs(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let chefs = chefs::list_best_chefs(db).await?;

    Ok(HttpResponse::Ok().json(chefs))
}

/// GET /bestChef/{id} - one chef document, behind the access gate.
async fn get_best_chef(
    identity: DecodedIdentity,
    id: DocumentId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    debug!(document_id = %id, caller = %Redacted(&identity.email), "best chef lookup");

    let db = require_db(&app_state)?;
    let chef = chefs::find_best_chef(db, id.as_str()).await?;

    Ok(HttpResponse::Ok().json(chef))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bestChefs")
            .route(web::get().to(list_best_chefs))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/bestChef/{id}")
            .wrap(AccessGate)
            .route(web::get().to(get_best_chef))
            .default_service(web::to(method_not_allowed)),
    );
}
