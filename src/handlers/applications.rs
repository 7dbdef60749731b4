//! Scholarship application handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{present, IdPath, JsonBody};
use crate::error::{ApiError, ApiResult};
use crate::models::{Application, ApplicationStatus, NewApplication};
use crate::state::AppState;

/// Body for `POST /scholarship/apply` and `POST /scholarship/renew`
#[derive(Debug, Deserialize)]
pub struct ScholarshipRequest {
    pub student_id: Option<i64>,
    pub student_name: Option<String>,
}

impl ScholarshipRequest {
    pub(crate) fn required(self) -> ApiResult<(i64, String)> {
        match (self.student_id.filter(|id| *id > 0), present(self.student_name)) {
            (Some(id), Some(name)) => Ok((id, name)),
            _ => Err(ApiError::BadRequest(
                "Student ID and name are required".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct PendingApplicationsResponse {
    pub pending_applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub application: Application,
}

#[derive(Debug, Serialize)]
pub struct ApplicationMessageResponse {
    pub message: &'static str,
    pub application: Application,
}

/// POST /scholarship/apply
pub async fn apply(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ScholarshipRequest>,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    let (student_id, student_name) = req.required()?;

    let application = state
        .applications
        .create(NewApplication::new(student_id, &student_name))
        .await?;
    tracing::info!(app_id = application.id, student_id, "Application submitted");

    Ok(Json(ApplicationMessageResponse {
        message: "Application submitted successfully",
        application,
    }))
}

/// GET /applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> ApiResult<Json<ApplicationsResponse>> {
    let applications = state.applications.list().await?;
    Ok(Json(ApplicationsResponse { applications }))
}

/// GET /applications/pending
pub async fn list_pending(
    State(state): State<AppState>,
) -> ApiResult<Json<PendingApplicationsResponse>> {
    let pending_applications = state
        .applications
        .list_by_status(ApplicationStatus::Pending)
        .await?;
    Ok(Json(PendingApplicationsResponse {
        pending_applications,
    }))
}

/// GET /applications/student/:id
pub async fn list_for_student(
    State(state): State<AppState>,
    IdPath(student_id): IdPath,
) -> ApiResult<Json<ApplicationsResponse>> {
    let applications = state.applications.list_for_student(student_id).await?;
    Ok(Json(ApplicationsResponse { applications }))
}

/// GET /application/:id
pub async fn get_application(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApplicationResponse>> {
    let application = state.applications.get(id).await?;
    Ok(Json(ApplicationResponse { application }))
}

/// Body for the application and renewal status endpoints
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

impl StatusUpdateRequest {
    pub(crate) fn required(self) -> ApiResult<ApplicationStatus> {
        present(self.status)
            .ok_or_else(|| ApiError::BadRequest("Status is required".to_string()))?
            .parse::<ApplicationStatus>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// PUT /application/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    set_status(&state, id, req.required()?).await
}

/// Shared by the status endpoint and the mayor's approve/reject actions
pub(crate) async fn set_status(
    state: &AppState,
    id: i64,
    status: ApplicationStatus,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    let application = state.applications.update_status(id, status).await?;
    tracing::info!(app_id = id, status = %status, "Application status updated");

    Ok(Json(ApplicationMessageResponse {
        message: "Application status updated",
        application,
    }))
}

/// PUT /application/:id/archive
pub async fn archive(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    let application = state.applications.archive(id).await?;
    tracing::info!(app_id = id, "Application archived");

    Ok(Json(ApplicationMessageResponse {
        message: "Application archived",
        application,
    }))
}
