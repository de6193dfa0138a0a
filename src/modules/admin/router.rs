use axum::{
    Router,
    routing::{get, patch},
};

use super::controller::{activate_user, deactivate_user, list_users};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}/activate", patch(activate_user))
        .route("/users/{id}/deactivate", patch(deactivate_user))
}
