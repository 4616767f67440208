use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pollutions::handlers;
use crate::features::pollutions::services::PollutionService;

/// Create routes for the pollutions feature
pub fn routes(service: Arc<PollutionService>) -> Router {
    Router::new()
        .route(
            "/api/pollutions",
            get(handlers::list_pollutions).post(handlers::create_pollution),
        )
        .route(
            "/api/pollutions/{id}",
            get(handlers::get_pollution)
                .put(handlers::update_pollution)
                .delete(handlers::delete_pollution),
        )
        .with_state(service)
}
