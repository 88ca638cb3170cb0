use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::state::AppState;

/// Every entity shares one route table; the first segment selects the entity.
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/:entity/get-all/:token", get(handlers::records::get_all))
        .route(
            "/:entity/get-by/:field/:value/:token",
            get(handlers::records::get_by),
        )
        .route("/:entity/add", post(handlers::records::add))
        .route("/:entity/update", post(handlers::records::update))
        .route(
            "/:entity/change-status/:id/:status/:token",
            get(handlers::records::change_status),
        )
        .route(
            "/:entity/change-stage/:id/:stage/:token",
            get(handlers::records::change_stage),
        )
        .with_state(state)
}
