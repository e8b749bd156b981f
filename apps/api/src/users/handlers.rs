//! Axum route handlers for the User API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserSyncRequest {
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

/// POST /api/v1/users/sync
///
/// Idempotent first-login creation: inserts the authenticated user if absent
/// and returns the stored row either way. Existing rows are never updated.
pub async fn handle_sync_user(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(request): Json<UserSyncRequest>,
) -> Result<Json<UserRow>, AppError> {
    if request.email.trim().is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO users (id, email, display_name, avatar_url)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(auth.user_id)
    .bind(&request.email)
    .bind(&request.display_name)
    .bind(&request.avatar_url)
    .execute(&state.db)
    .await?;

    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(auth.user_id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(user))
}
