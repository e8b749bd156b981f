//! Axum route handlers for the Feedback API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::feedback::generator::{create_report, run_feedback_generation, serialize_transcript};
use crate::feedback::scorecard::Scorecard;
use crate::models::interview::InterviewRow;
use crate::session::driver::TranscriptTurn;
use crate::state::AppState;

/// Body for feedback generation. Callers send either the pre-joined
/// conversation text or the raw transcript turns.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "conversationHistory")]
    pub conversation_history: Option<String>,
    pub messages: Option<Vec<TranscriptTurn>>,
}

impl FeedbackRequest {
    /// Resolves the conversation text, rejecting empty transcripts before
    /// any model call.
    pub fn conversation_text(&self) -> Result<String, AppError> {
        let text = match (&self.conversation_history, &self.messages) {
            (Some(history), _) => history.clone(),
            (None, Some(messages)) => serialize_transcript(messages),
            (None, None) => String::new(),
        };
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Conversation history and user ID are required".to_string(),
            ));
        }
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    #[serde(rename = "reportId")]
    pub report_id: Uuid,
    pub feedback: Scorecard,
}

/// POST /api/v1/interviews/:id/feedback
///
/// Rejection order: empty transcript (400), identity mismatch (401),
/// interview not found or not owned (404), all before the model call.
/// A malformed model reply still yields a report via the fallback scorecard.
pub async fn handle_generate_feedback(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let conversation = request.conversation_text()?;
    auth.require_user(request.user_id)?;

    let interview = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE id = $1 AND user_id = $2",
    )
    .bind(interview_id)
    .bind(request.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    let scorecard = run_feedback_generation(&state.llm, &interview, &conversation).await?;

    let report = create_report(&state.db, request.user_id, interview_id, &scorecard).await?;

    Ok(Json(FeedbackResponse {
        success: true,
        report_id: report.id,
        feedback: scorecard,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_text_prefers_history_string() {
        let request = FeedbackRequest {
            user_id: Uuid::new_v4(),
            conversation_history: Some("user: hello".to_string()),
            messages: Some(vec![TranscriptTurn {
                role: "user".to_string(),
                content: "ignored".to_string(),
            }]),
        };
        assert_eq!(request.conversation_text().unwrap(), "user: hello");
    }

    #[test]
    fn test_conversation_text_serializes_messages() {
        let request = FeedbackRequest {
            user_id: Uuid::new_v4(),
            conversation_history: None,
            messages: Some(vec![
                TranscriptTurn {
                    role: "assistant".to_string(),
                    content: "Q1".to_string(),
                },
                TranscriptTurn {
                    role: "user".to_string(),
                    content: "A1".to_string(),
                },
            ]),
        };
        assert_eq!(request.conversation_text().unwrap(), "assistant: Q1\nuser: A1");
    }

    #[test]
    fn test_conversation_text_rejects_missing_transcript() {
        let request = FeedbackRequest {
            user_id: Uuid::new_v4(),
            conversation_history: None,
            messages: None,
        };
        assert!(matches!(
            request.conversation_text(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_conversation_text_rejects_blank_history() {
        let request = FeedbackRequest {
            user_id: Uuid::new_v4(),
            conversation_history: Some("   ".to_string()),
            messages: None,
        };
        assert!(request.conversation_text().is_err());
    }

    #[test]
    fn test_request_deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "userId": Uuid::new_v4(),
            "conversationHistory": "user: hi"
        });
        let request: FeedbackRequest = serde_json::from_value(json).unwrap();
        assert!(request.conversation_history.is_some());
        assert!(request.messages.is_none());
    }
}
