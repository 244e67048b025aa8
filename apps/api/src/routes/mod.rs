pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::cors::{cors_layer, origin_guard, OriginPolicy};
use crate::state::AppState;
use crate::users::handlers;

pub fn build_router(state: AppState) -> Router {
    let policy = Arc::new(OriginPolicy::new(state.config.allowed_origins.clone()));
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/health", get(health::health_handler))
        // Users API
        .route("/", get(handlers::handle_list_users))
        .route("/users", post(handlers::handle_create_user))
        .route(
            "/users/:id",
            get(handlers::handle_get_user)
                .put(handlers::handle_update_user)
                .delete(handlers::handle_delete_user),
        )
        .layer(cors)
        .layer(middleware::from_fn_with_state(policy, origin_guard))
        .with_state(state)
}
