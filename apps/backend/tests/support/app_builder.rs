use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::{AppState, SecurityConfig};
use backend::AppError;

use super::auth::TEST_SECRET;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// State backed by a fresh, migrated in-memory SQLite database.
pub async fn test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db("sqlite::memory:")
        .with_migrations(true)
        .with_security(SecurityConfig::new(TEST_SECRET))
        .build()
        .await
}

/// State with no database at all, for paths that must fail before storage.
pub async fn test_state_without_db() -> Result<AppState, AppError> {
    build_state()
        .with_security(SecurityConfig::new(TEST_SECRET))
        .build()
        .await
}

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    route_config: RouteConfigFn,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: Box::new(routes::configure),
        }
    }

    /// Replace the production routes with custom ones
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Box::new(config_fn);
        self
    }

    /// Build the test service with the same middleware stack as `main`,
    /// minus CORS.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| route_config(cfg)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
