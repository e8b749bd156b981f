//! Feedback Generation: turns a finished session's transcript into a
//! persisted report.
//!
//! Flow: serialize transcript → rubric prompt → ChatModel::complete →
//!       strict scorecard parse (fallback on any shape mismatch) → INSERT.
//!
//! Parse failures never fail the request: once a session reaches Finished
//! with a non-empty transcript, a report is always produced.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};
use crate::feedback::scorecard::{Scorecard, MAX_SCORE};
use crate::llm_client::{strip_json_fences, ChatModel};
use crate::models::interview::InterviewRow;
use crate::models::report::ReportRow;
use crate::session::driver::TranscriptTurn;

/// Joins transcript turns into the newline-delimited `role: content` block
/// embedded in the rubric prompt.
pub fn serialize_transcript(turns: &[TranscriptTurn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.role, turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the model reply into a scorecard, substituting the documented
/// fallback on any parse or shape failure. Scores outside the 0-10 scale
/// count as malformed; the aggregate must stay within the scale.
pub fn parse_scorecard(text: &str) -> Scorecard {
    match serde_json::from_str::<Scorecard>(strip_json_fences(text)) {
        Ok(scorecard) if scorecard.scores_in_range() => scorecard,
        Ok(_) => {
            warn!("Feedback scores outside the 0-{MAX_SCORE} scale, using fallback scorecard");
            Scorecard::fallback()
        }
        Err(e) => {
            warn!("Failed to parse feedback JSON, using fallback scorecard: {e}");
            Scorecard::fallback()
        }
    }
}

pub fn build_feedback_prompt(interview: &InterviewRow, conversation: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{role}", &interview.role)
        .replace("{level}", interview.level.as_deref().unwrap_or("unspecified"))
        .replace("{techstack}", &interview.tags.join(", "))
        .replace("{conversation}", conversation)
}

/// Model round trip. Upstream transport errors still fail the request;
/// only malformed replies fall back.
pub async fn run_feedback_generation(
    model: &dyn ChatModel,
    interview: &InterviewRow,
    conversation: &str,
) -> Result<Scorecard, AppError> {
    let prompt = build_feedback_prompt(interview, conversation);
    let reply = model
        .complete(&prompt, FEEDBACK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Feedback generation failed: {e}")))?;

    Ok(parse_scorecard(&reply))
}

/// Inserts one report row embedding the (possibly-fallback) scorecard.
/// Reports are append-only; repeat attempts of the same interview each get
/// their own row.
pub async fn create_report(
    pool: &PgPool,
    user_id: Uuid,
    interview_id: Uuid,
    scorecard: &Scorecard,
) -> Result<ReportRow, AppError> {
    let feedback = serde_json::to_value(scorecard)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize scorecard: {e}")))?;

    let report = sqlx::query_as::<_, ReportRow>(
        r#"
        INSERT INTO reports (id, user_id, interview_id, feedback)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(interview_id)
    .bind(&feedback)
    .fetch_one(pool)
    .await?;

    info!(
        "Created report {} for interview {} (user {})",
        report.id, interview_id, user_id
    );

    Ok(report)
}
