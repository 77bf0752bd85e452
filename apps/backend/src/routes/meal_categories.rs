use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::repos::meal_categories;
use crate::routes::fallback::method_not_allowed;
use crate::state::app_state::AppState;

async fn list_meal_categories(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let categories = meal_categories::list_meal_categories(db).await?;

    Ok(HttpResponse::Ok().json(categories))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mealCategories")
            .route(web::get().to(list_meal_categories))
            .default_service(web::to(method_not_allowed)),
    );
}
