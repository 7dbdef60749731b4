//! Mayor routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, mayor, system::preflight};
use crate::state::AppState;

pub fn mayor_routes() -> Router<AppState> {
    Router::new()
        .route("/mayor/add", post(admin::add_mayor).options(preflight))
        .route("/mayor/dashboard", get(mayor::dashboard).options(preflight))
        .route("/mayor/scholars", get(mayor::scholars))
        .route("/mayor/records", get(mayor::records))
        .route(
            "/mayor/applications",
            get(mayor::applications).options(preflight),
        )
        .route(
            "/mayor/applications/approve/:id",
            post(mayor::approve).options(preflight),
        )
        .route(
            "/mayor/applications/reject/:id",
            post(mayor::reject).options(preflight),
        )
}
