//! Axum route handlers for the Report API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::feedback::aggregate::{summarize, ReportSummary};
use crate::feedback::scorecard::Scorecard;
use crate::models::report::ReportWithInterviewRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportWithInterviewRow>,
}

/// GET /api/v1/reports
pub async fn handle_list_reports(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ReportListResponse>, AppError> {
    let reports = sqlx::query_as::<_, ReportWithInterviewRow>(
        r#"
        SELECT r.id, r.interview_id, r.feedback, r.created_at,
               i.role, i.interview_type, i.level, i.tags
        FROM reports r
        JOIN interviews i ON i.id = r.interview_id
        WHERE r.user_id = $1
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ReportListResponse { reports }))
}

#[derive(Debug, Serialize)]
pub struct ReportDetailResponse {
    #[serde(flatten)]
    pub report: ReportWithInterviewRow,
    pub summary: ReportSummary,
}

/// GET /api/v1/reports/:id
///
/// The results view: report, interview metadata, and the computed aggregate
/// summary (average, band, strength/improvement partition).
pub async fn handle_get_report(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportDetailResponse>, AppError> {
    let report = sqlx::query_as::<_, ReportWithInterviewRow>(
        r#"
        SELECT r.id, r.interview_id, r.feedback, r.created_at,
               i.role, i.interview_type, i.level, i.tags
        FROM reports r
        JOIN interviews i ON i.id = r.interview_id
        WHERE r.id = $1 AND r.user_id = $2
        "#,
    )
    .bind(id)
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Report {id} not found")))?;

    // Feedback is written by the generator, which guarantees a well-formed
    // scorecard (fallback included), so a shape mismatch here is a bug.
    let scorecard: Scorecard = serde_json::from_value(report.feedback.clone())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored feedback is malformed: {e}")))?;

    let summary = summarize(&scorecard);

    Ok(Json(ReportDetailResponse { report, summary }))
}

/// DELETE /api/v1/reports/:id
pub async fn handle_delete_report(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM reports WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(auth.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Report {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
