//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::models::interview::InterviewRow;
use crate::models::user::UserRow;
use crate::session::workflow::{render_workflow, Workflow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub workflow: Workflow,
}

/// POST /api/v1/interviews/:id/session
///
/// Returns the rendered workflow graph for one interview, ready to hand to
/// the voice runtime. Owner-scoped; the caller starts the call client-side.
pub async fn handle_start_session(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    auth.require_user(request.user_id)?;

    let interview = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE id = $1 AND user_id = $2",
    )
    .bind(interview_id)
    .bind(request.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(request.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    let workflow = render_workflow(&user.display_name, user.id, &interview.questions);

    Ok(Json(SessionResponse {
        success: true,
        workflow,
    }))
}
