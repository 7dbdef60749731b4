//! Mayor dashboard handlers

use axum::{extract::State, Json};
use serde::Serialize;

use super::applications::{set_status, ApplicationMessageResponse, ApplicationsResponse};
use super::IdPath;
use crate::error::ApiResult;
use crate::models::{ApplicationStatus, ScholarshipRecord, Student};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MayorDashboard {
    pub total_new: i64,
    pub pending_new: i64,
    pub under_review_new: i64,
    pub approved_new: i64,
    pub rejected_new: i64,
    pub total_renewals: i64,
    pub pending_renewals: i64,
    pub under_review_renewals: i64,
    pub approved_renewals: i64,
    pub rejected_renewals: i64,
}

/// GET /mayor/dashboard - Application and renewal totals per status
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<MayorDashboard>> {
    let (new, renewals) = tokio::try_join!(
        state.applications.status_counts(),
        state.renewals.status_counts()
    )?;

    Ok(Json(MayorDashboard {
        total_new: new.total,
        pending_new: new.pending,
        under_review_new: new.under_review,
        approved_new: new.approved,
        rejected_new: new.rejected,
        total_renewals: renewals.total,
        pending_renewals: renewals.pending,
        under_review_renewals: renewals.under_review,
        approved_renewals: renewals.approved,
        rejected_renewals: renewals.rejected,
    }))
}

#[derive(Debug, Serialize)]
pub struct ScholarsResponse {
    pub scholars: Vec<Student>,
}

/// GET /mayor/scholars
pub async fn scholars(State(state): State<AppState>) -> Json<ScholarsResponse> {
    Json(ScholarsResponse {
        scholars: state.students.list().await,
    })
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<ScholarshipRecord>,
}

/// GET /mayor/records
pub async fn records(State(state): State<AppState>) -> Json<RecordsResponse> {
    Json(RecordsResponse {
        records: state.records.list().to_vec(),
    })
}

/// GET /mayor/applications - Newest submissions first
pub async fn applications(State(state): State<AppState>) -> ApiResult<Json<ApplicationsResponse>> {
    let applications = state.applications.list_newest_first().await?;
    Ok(Json(ApplicationsResponse { applications }))
}

/// POST /mayor/applications/approve/:id
pub async fn approve(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    set_status(&state, id, ApplicationStatus::Approved).await
}

/// POST /mayor/applications/reject/:id
pub async fn reject(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ApplicationMessageResponse>> {
    set_status(&state, id, ApplicationStatus::Rejected).await
}
