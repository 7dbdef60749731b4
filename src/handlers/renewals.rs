//! Renewal handlers and the renewal window

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::applications::{ScholarshipRequest, StatusUpdateRequest};
use super::{IdPath, JsonBody};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewRenewal, Renewal};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RenewalSubmittedResponse {
    pub message: &'static str,
    pub application: Renewal,
}

/// POST /scholarship/renew - Renew the student's earliest application
pub async fn renew(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ScholarshipRequest>,
) -> ApiResult<Json<RenewalSubmittedResponse>> {
    let (student_id, student_name) = req.required()?;

    let parent = state
        .applications
        .first_for_student(student_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No application found for student {}", student_id))
        })?;

    let renewal = state
        .renewals
        .create(NewRenewal::new(parent.id, student_id, &student_name))
        .await?;
    tracing::info!(
        renewal_id = renewal.id,
        app_id = parent.id,
        student_id,
        "Renewal submitted"
    );

    Ok(Json(RenewalSubmittedResponse {
        message: "Renewal application submitted successfully",
        application: renewal,
    }))
}

#[derive(Debug, Serialize)]
pub struct RenewalsResponse {
    pub renewals: Vec<Renewal>,
}

/// GET /renewals
pub async fn list_renewals(State(state): State<AppState>) -> ApiResult<Json<RenewalsResponse>> {
    let renewals = state.renewals.list().await?;
    Ok(Json(RenewalsResponse { renewals }))
}

#[derive(Debug, Serialize)]
pub struct RenewalResponse {
    pub renewal: Renewal,
}

/// GET /renewals/:id
pub async fn get_renewal(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<RenewalResponse>> {
    let renewal = state.renewals.get(id).await?;
    Ok(Json(RenewalResponse { renewal }))
}

#[derive(Debug, Serialize)]
pub struct RenewalMessageResponse {
    pub message: &'static str,
    pub renewal: Renewal,
}

/// PUT /renewal/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> ApiResult<Json<RenewalMessageResponse>> {
    let status = req.required()?;
    let renewal = state.renewals.update_status(id, status).await?;
    tracing::info!(renewal_id = id, status = %status, "Renewal status updated");

    Ok(Json(RenewalMessageResponse {
        message: "Renewal status updated",
        renewal,
    }))
}

/// PUT /renewal/:id/archive
pub async fn archive(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<RenewalMessageResponse>> {
    let renewal = state.renewals.archive(id).await?;
    tracing::info!(renewal_id = id, "Renewal archived");

    Ok(Json(RenewalMessageResponse {
        message: "Renewal archived",
        renewal,
    }))
}

#[derive(Debug, Serialize)]
pub struct RenewalWindowResponse {
    pub is_open: bool,
}

/// GET /renewal/status
pub async fn window_status(
    State(state): State<AppState>,
) -> ApiResult<Json<RenewalWindowResponse>> {
    let is_open = state.renewal_settings.is_open().await?;
    Ok(Json(RenewalWindowResponse { is_open }))
}

#[derive(Debug, Deserialize)]
pub struct RenewalWindowRequest {
    pub is_open: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct RenewalWindowUpdatedResponse {
    pub message: &'static str,
    pub is_open: bool,
}

/// PUT /renewal/status
pub async fn set_window_status(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RenewalWindowRequest>,
) -> ApiResult<Json<RenewalWindowUpdatedResponse>> {
    let is_open = req
        .is_open
        .ok_or_else(|| ApiError::BadRequest("is_open field is required".to_string()))?;

    let is_open = state.renewal_settings.set_open(is_open).await?;
    tracing::info!(is_open, "Renewal window updated");

    Ok(Json(RenewalWindowUpdatedResponse {
        message: "Renewal status updated",
        is_open,
    }))
}
