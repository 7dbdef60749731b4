//! Student roster routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{students, system::preflight};
use crate::state::AppState;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(students::list_students))
        .route("/student/:id", get(students::get_student))
        .route("/student/profile/:id", get(students::get_student_profile))
        .route("/add_student", post(students::add_student).options(preflight))
}
