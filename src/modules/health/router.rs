use axum::{Router, routing::get};

use super::controller::{health, root};
use crate::state::AppState;

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
