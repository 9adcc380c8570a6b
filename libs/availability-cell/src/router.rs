// libs/availability-cell/src/router.rs
use std::sync::Arc;

use axum::{Router, routing::get};

use shared_config::AppConfig;

use crate::handlers;

pub fn availability_routes(state: Arc<AppConfig>) -> Router {
    // Consumed by the public booking form; no authentication required
    let public_routes = Router::new()
        .route("/", get(handlers::get_available_slots));

    Router::new()
        .merge(public_routes)
        .with_state(state)
}
