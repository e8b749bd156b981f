//! Axum route handlers for the Interview CRUD API.
//!
//! Every query is owner-scoped (`user_id = $n`). Questions and type are
//! immutable post-creation; only role, description, and tags can be edited.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::models::interview::InterviewRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InterviewListResponse {
    pub interviews: Vec<InterviewRow>,
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<InterviewListResponse>, AppError> {
    let interviews = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(auth.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(InterviewListResponse { interviews }))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewRow>, AppError> {
    let interview = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(interview))
}

/// Editable subset of an interview. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct InterviewUpdate {
    pub role: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// PATCH /api/v1/interviews/:id
pub async fn handle_update_interview(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
    Json(update): Json<InterviewUpdate>,
) -> Result<Json<InterviewRow>, AppError> {
    if let Some(role) = &update.role {
        if role.trim().len() < 2 {
            return Err(AppError::Validation(
                "role must be at least 2 characters".to_string(),
            ));
        }
    }

    let interview = sqlx::query_as::<_, InterviewRow>(
        r#"
        UPDATE interviews
        SET role = COALESCE($1, role),
            description = COALESCE($2, description),
            tags = COALESCE($3, tags)
        WHERE id = $4 AND user_id = $5
        RETURNING *
        "#,
    )
    .bind(&update.role)
    .bind(&update.description)
    .bind(&update.tags)
    .bind(id)
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    Ok(Json(interview))
}

/// DELETE /api/v1/interviews/:id
///
/// Reports referencing the interview are removed by the FK cascade.
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM interviews WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Interview {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
