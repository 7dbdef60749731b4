//! Authentication HTTP handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{present, students::ProfileResponse, AuthenticatedUser, JsonBody};
use crate::auth::{Claims, TokenError};
use crate::error::{ApiError, ApiResult};
use crate::models::{Profile, User};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /login - Exchange email and password for a session token
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (present(req.email), req.password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    let user = state
        .users
        .authenticate(&email, &password)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let token = state.tokens.issue(&user)?;
    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse { token, user }))
}

#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<Claims>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /verify_token - Report whether a token is valid.
///
/// Invalid tokens are a normal answer here, not an error response.
pub async fn verify_token(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<VerifyTokenRequest>,
) -> ApiResult<Json<VerifyTokenResponse>> {
    let token = present(req.token)
        .ok_or_else(|| ApiError::BadRequest("Token is required".to_string()))?;

    let response = match state.tokens.verify(&token) {
        Ok(claims) => VerifyTokenResponse {
            valid: true,
            decoded: Some(claims),
            error: None,
        },
        Err(e @ (TokenError::Expired | TokenError::Invalid(_))) => VerifyTokenResponse {
            valid: false,
            decoded: None,
            error: Some(e.to_string()),
        },
        Err(e) => return Err(e.into()),
    };

    Ok(Json(response))
}

/// GET /me - Profile of the bearer token holder
pub async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ProfileResponse>> {
    let account = state.users.get(user.claims.user_id).await?;
    let student = state.students.find(account.id).await;

    Ok(Json(ProfileResponse {
        profile: Profile::new(&account, student.as_ref()),
    }))
}
