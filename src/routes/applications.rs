//! Scholarship application routes

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{applications, system::preflight};
use crate::state::AppState;

pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/scholarship/apply",
            post(applications::apply).options(preflight),
        )
        .route("/applications", get(applications::list_applications))
        .route("/applications/pending", get(applications::list_pending))
        .route(
            "/applications/student/:id",
            get(applications::list_for_student).options(preflight),
        )
        .route("/application/:id", get(applications::get_application))
        .route(
            "/application/:id/status",
            put(applications::update_status).options(preflight),
        )
        .route(
            "/application/:id/archive",
            put(applications::archive).options(preflight),
        )
}
