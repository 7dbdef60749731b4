//! Route definitions for the scholarship dashboard API

mod admin;
mod applications;
mod auth;
mod mayor;
mod renewals;
mod students;

use axum::{routing::get, Router};

pub use admin::admin_routes;
pub use applications::application_routes;
pub use auth::auth_routes;
pub use mayor::mayor_routes;
pub use renewals::renewal_routes;
pub use students::student_routes;

use crate::handlers::system;
use crate::middleware;
use crate::state::AppState;

/// Full API router with tracing and security-header middleware applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health_check))
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(mayor_routes())
        .merge(student_routes())
        .merge(application_routes())
        .merge(renewal_routes())
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .layer(axum::middleware::from_fn(middleware::request_tracing))
}
