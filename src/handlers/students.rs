//! Student roster handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{present, IdPath, JsonBody};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewStudent, Profile, Student};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StudentsResponse {
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct StudentCreatedResponse {
    pub message: &'static str,
    pub student: Student,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddStudentRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub course: Option<String>,
    #[validate(range(min = 1, max = 10))]
    pub year: Option<i32>,
}

/// GET /students
pub async fn list_students(State(state): State<AppState>) -> Json<StudentsResponse> {
    Json(StudentsResponse {
        students: state.students.list().await,
    })
}

/// GET /student/:id
pub async fn get_student(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<StudentResponse>> {
    let student = state.students.get(id).await?;
    Ok(Json(StudentResponse { student }))
}

/// GET /student/profile/:id - Account details plus course and year when the
/// account is on the roster
pub async fn get_student_profile(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state.users.get(id).await?;
    let student = state.students.find(id).await;

    Ok(Json(ProfileResponse {
        profile: Profile::new(&user, student.as_ref()),
    }))
}

/// POST /add_student
pub async fn add_student(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddStudentRequest>,
) -> ApiResult<Json<StudentCreatedResponse>> {
    let (Some(name), Some(email)) = (present(req.name.clone()), present(req.email.clone())) else {
        return Err(ApiError::BadRequest(
            "Name and email are required".to_string(),
        ));
    };
    req.validate()?;

    let student = state
        .students
        .create(NewStudent {
            name,
            email,
            course: req.course.unwrap_or_default(),
            year: req.year.unwrap_or(1),
        })
        .await;

    Ok(Json(StudentCreatedResponse {
        message: "Student added successfully",
        student,
    }))
}
