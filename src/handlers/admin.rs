//! Admin dashboard and account management handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{present, JsonBody};
use crate::error::{ApiError, ApiResult};
use crate::models::{User, UserRole};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub total_users: usize,
    pub total_students: usize,
    pub total_admins: usize,
    pub total_mayors: usize,
    pub total_applications: i64,
    pub pending_applications: i64,
}

/// GET /admin/dashboard - Account and application totals
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<AdminDashboard>> {
    let roles = state.users.count_by_role().await;
    let count = |role: UserRole| roles.get(&role).copied().unwrap_or(0);
    let applications = state.applications.status_counts().await?;

    Ok(Json(AdminDashboard {
        total_users: state.users.len().await,
        total_students: count(UserRole::Student),
        total_admins: count(UserRole::Admin),
        total_mayors: count(UserRole::Mayor),
        total_applications: applications.total,
        pending_applications: applications.pending,
    }))
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub data: Vec<User>,
}

/// GET /admin/users
pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    Json(UsersResponse {
        data: state.users.list().await,
    })
}

#[derive(Debug, Serialize)]
pub struct AdminsResponse {
    pub admins: Vec<User>,
}

/// GET /admins
pub async fn list_admins(State(state): State<AppState>) -> Json<AdminsResponse> {
    Json(AdminsResponse {
        admins: state.users.list_by_role(UserRole::Admin).await,
    })
}

/// Body for `POST /admin/add`. Either `name` or the name parts may be given.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAdminRequest {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AddAdminRequest {
    fn full_name(&self) -> Option<String> {
        present(self.name.clone()).or_else(|| {
            let parts: Vec<String> = [&self.first_name, &self.middle_name, &self.last_name]
                .into_iter()
                .filter_map(|part| present(part.clone()))
                .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AdminCreatedResponse {
    pub message: &'static str,
    pub admin: User,
}

/// POST /admin/add
pub async fn add_admin(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddAdminRequest>,
) -> ApiResult<Json<AdminCreatedResponse>> {
    let (name, email) = required_account_fields(req.full_name(), req.email.clone())?;
    req.validate()?;
    let admin = create_account(&state, UserRole::Admin, &name, &email, req.password).await?;

    Ok(Json(AdminCreatedResponse {
        message: "Admin added successfully",
        admin,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMayorRequest {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MayorCreatedResponse {
    pub message: &'static str,
    pub mayor: User,
}

/// POST /mayor/add
pub async fn add_mayor(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddMayorRequest>,
) -> ApiResult<Json<MayorCreatedResponse>> {
    let (name, email) = required_account_fields(req.name.clone(), req.email.clone())?;
    req.validate()?;
    let mayor = create_account(&state, UserRole::Mayor, &name, &email, req.password).await?;

    Ok(Json(MayorCreatedResponse {
        message: "Mayor added successfully",
        mayor,
    }))
}

/// Missing names and emails are reported before format validation runs
fn required_account_fields(
    name: Option<String>,
    email: Option<String>,
) -> ApiResult<(String, String)> {
    match (present(name), present(email)) {
        (Some(name), Some(email)) => Ok((name, email)),
        _ => Err(ApiError::BadRequest(
            "Name and email are required".to_string(),
        )),
    }
}

async fn create_account(
    state: &AppState,
    role: UserRole,
    name: &str,
    email: &str,
    password: Option<String>,
) -> ApiResult<User> {
    let password = password.filter(|p| !p.is_empty());

    let user = state
        .users
        .create(role, name, email, password.as_deref())
        .await?;
    Ok(user)
}
