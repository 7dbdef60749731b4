//! Renewal routes

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{renewals, system::preflight};
use crate::state::AppState;

pub fn renewal_routes() -> Router<AppState> {
    Router::new()
        .route("/scholarship/renew", post(renewals::renew).options(preflight))
        .route("/renewals", get(renewals::list_renewals))
        .route("/renewals/:id", get(renewals::get_renewal))
        .route(
            "/renewal/:id/status",
            put(renewals::update_status).options(preflight),
        )
        .route(
            "/renewal/:id/archive",
            put(renewals::archive).options(preflight),
        )
        .route(
            "/renewal/status",
            get(renewals::window_status)
                .put(renewals::set_window_status)
                .options(preflight),
        )
}
