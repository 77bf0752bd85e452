use actix_web::web;

pub mod auth;
pub mod chefs;
pub mod fallback;
pub mod health;
pub mod meal_categories;
pub mod root;

/// Register every endpoint. `main` and the integration tests share this, so
/// the access gate on `/bestChef/{id}` is always in place and unmatched
/// requests still get the uniform error body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(chefs::configure_routes)
        .configure(meal_categories::configure_routes)
        .default_service(web::to(fallback::route_not_found));
}
