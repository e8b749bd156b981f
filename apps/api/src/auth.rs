//! Authenticated identity extraction.
//!
//! Token verification happens upstream (the gateway terminates the auth
//! session and forwards the verified subject in `x-user-id`). This module
//! only turns that header into an explicit `AuthSession` value that handlers
//! pass down and compare against resource ownership.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: Uuid,
}

impl AuthSession {
    /// Rejects the request unless the authenticated identity matches the
    /// user id the caller claims to act as. Checked before any model call
    /// or database write.
    pub fn require_user(&self, claimed: Uuid) -> Result<(), AppError> {
        if self.user_id == claimed {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthSession { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_user_accepts_matching_id() {
        let id = Uuid::new_v4();
        let session = AuthSession { user_id: id };
        assert!(session.require_user(id).is_ok());
    }

    #[test]
    fn test_require_user_rejects_mismatch() {
        let session = AuthSession {
            user_id: Uuid::new_v4(),
        };
        let result = session.require_user(Uuid::new_v4());
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
