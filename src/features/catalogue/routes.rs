use axum::{routing::get, Router};

use crate::features::catalogue::handler;

pub fn routes() -> Router {
    Router::new().route("/api/catalogue", get(handler::get_catalogue))
}
