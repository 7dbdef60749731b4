//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, system::preflight};
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login).options(preflight))
        .route("/verify_token", post(auth::verify_token).options(preflight))
        .route("/me", get(auth::me))
}
