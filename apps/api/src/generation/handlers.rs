//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthSession;
use crate::errors::AppError;
use crate::generation::question_gen::{generate_from_info, generate_structured, GenerateRequest};
use crate::models::interview::InterviewRow;
use crate::state::AppState;

/// Structured mode replies with the question list only; free-text mode
/// replies with the full inferred interview.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Questions {
        success: bool,
        questions: Vec<String>,
    },
    Interview {
        success: bool,
        interview: InterviewRow,
    },
}

/// POST /api/v1/interviews/generate
///
/// Accepts either the structured field tuple or `{info, userid}`.
/// Generation failures surface as request failures; no partial interview is
/// left behind because the insert is atomic.
pub async fn handle_generate(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    auth.require_user(request.user_id())?;

    let response = match request {
        GenerateRequest::Structured(request) => {
            let questions = generate_structured(&state.db, &state.llm, request).await?;
            GenerateResponse::Questions {
                success: true,
                questions,
            }
        }
        GenerateRequest::FreeText(request) => {
            let interview = generate_from_info(&state.db, &state.llm, request).await?;
            GenerateResponse::Interview {
                success: true,
                interview,
            }
        }
    };

    Ok(Json(response))
}
