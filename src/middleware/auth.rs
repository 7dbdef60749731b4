//! Bearer token extraction

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

use crate::auth::{Claims, TokenError, TokenService};
use crate::error::ErrorResponse;

/// User identified by a valid `Authorization: Bearer <token>` header
///
/// # Example
///
/// ```rust,ignore
/// async fn whoami(user: AuthenticatedUser) -> String {
///     format!("user {}", user.claims.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: Claims,
}

fn reject(code: &'static str, message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
            code,
        }),
    )
        .into_response()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    reject(
                        "MISSING_TOKEN",
                        "Authorization header with Bearer token required",
                    )
                })?;

        let tokens = Arc::<TokenService>::from_ref(state);
        let claims = tokens.verify(bearer.token()).map_err(|e| match e {
            TokenError::Expired => reject("TOKEN_EXPIRED", "Token has expired"),
            _ => reject("INVALID_TOKEN", "Invalid token"),
        })?;

        Ok(AuthenticatedUser { claims })
    }
}
