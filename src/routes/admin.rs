//! Admin routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, system::preflight};
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/add", post(admin::add_admin).options(preflight))
        .route("/admins", get(admin::list_admins))
}
