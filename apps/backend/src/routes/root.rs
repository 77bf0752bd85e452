use actix_web::{web, HttpResponse};

use crate::routes::fallback::method_not_allowed;

pub const LIVENESS_MESSAGE: &str = "Taste Trackers Server is running!";

async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(root))
            .default_service(web::to(method_not_allowed)),
    );
}
