//! Session token issuing and verification
//!
//! Tokens are HS256 JWTs carrying the user id, email and role. Expiry is the
//! only invalidation mechanism.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{User, UserRole};

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid(String),

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    #[serde(rename = "user_type")]
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies session tokens with a symmetric key
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issue a token for `user`, valid for the configured window
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = TimeDelta::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                TokenError::Encoding(format!("Token lifetime out of range: {}s", self.ttl_seconds))
            })?;

        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify and decode a token
    ///
    /// # Returns
    /// * `Ok(Claims)` if the signature checks out and the token has not expired
    /// * `Err(TokenError::Expired)` once the embedded expiry has passed
    /// * `Err(TokenError::Invalid)` for any other failure
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 4,
            name: "Mayor Johnson".to_string(),
            email: "mayor@example.com".to_string(),
            password_hash: String::new(),
            role: UserRole::Mayor,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new("test-secret-key", 7200);
        let user = create_test_user();

        let token = service.issue(&user).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Mayor);
        assert_eq!(claims.exp - claims.iat, 7200);
    }

    #[test]
    fn test_expired_token() {
        let service = TokenService::new("test-secret-key", -30);
        let token = service.issue(&create_test_user()).unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let service = TokenService::new("test-secret-key", i64::MAX);
        assert!(matches!(
            service.issue(&create_test_user()),
            Err(TokenError::Encoding(_))
        ));
    }

    #[test]
    fn test_invalid_token() {
        let service = TokenService::new("test-secret-key", 900);
        assert!(matches!(
            service.verify("invalid.token.here"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let token = TokenService::new("secret1", 900)
            .issue(&create_test_user())
            .unwrap();

        let result = TokenService::new("secret2", 900).verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_claims_use_user_type_key() {
        let service = TokenService::new("k", 60);
        let claims = service.verify(&service.issue(&create_test_user()).unwrap()).unwrap();
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user_type"], "mayor");
    }
}
