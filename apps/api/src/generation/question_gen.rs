//! Question Generation: builds the prompt, calls the model, parses the JSON
//! reply, and persists the resulting interview.
//!
//! Flow: validate request → build prompt → ChatModel::complete →
//!       parse (bare array or {questions} wrapper) → sanitize → INSERT.
//!
//! The model is the sole source of field inference in free-text mode; this
//! module performs no independent NLP.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::prompts::{
    FREEFORM_PROMPT_TEMPLATE, FREEFORM_SYSTEM, STRUCTURED_PROMPT_TEMPLATE, STRUCTURED_SYSTEM,
};
use crate::llm_client::{strip_json_fences, ChatModel};
use crate::models::interview::{InterviewRow, InterviewType};

const MIN_ROLE_LEN: usize = 2;
const MAX_AMOUNT: u8 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Structured generation request: the caller supplies every field and the
/// model only writes questions.
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredGenerateRequest {
    #[serde(rename = "userid")]
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub role: String,
    pub level: Option<String>,
    pub techstack: Vec<String>,
    pub amount: u8,
    #[serde(rename = "additionalInfo", default)]
    pub additional_info: Option<String>,
}

/// Free-text generation request: the model infers type/role/level/tags/amount
/// from the description.
#[derive(Debug, Clone, Deserialize)]
pub struct FreeTextGenerateRequest {
    #[serde(rename = "userid")]
    pub user_id: Uuid,
    pub info: String,
}

/// Either request shape, distinguished by body structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenerateRequest {
    Structured(StructuredGenerateRequest),
    FreeText(FreeTextGenerateRequest),
}

impl GenerateRequest {
    pub fn user_id(&self) -> Uuid {
        match self {
            GenerateRequest::Structured(r) => r.user_id,
            GenerateRequest::FreeText(r) => r.user_id,
        }
    }
}

/// Full object the model returns in free-text mode. `type`, `role` and
/// `questions` are required; everything else defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedInterview {
    #[serde(rename = "type")]
    pub interview_type: String,
    pub role: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amount: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Reply parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses the model reply for structured mode. Accepts either a bare JSON
/// array of question strings or an object wrapping the array under a
/// `questions` key.
pub fn parse_question_list(text: &str) -> Result<Vec<String>, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| AppError::GenerationParse(e.to_string()))?;

    let array = match &value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("questions") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::MalformedGeneration(
                    "reply object has no 'questions' array".to_string(),
                ))
            }
        },
        _ => {
            return Err(AppError::MalformedGeneration(
                "reply is neither an array nor an object".to_string(),
            ))
        }
    };

    let questions: Vec<String> = array
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AppError::MalformedGeneration("question list contains a non-string".to_string())
            })
        })
        .collect::<Result<_, _>>()?;

    if questions.is_empty() {
        return Err(AppError::MalformedGeneration(
            "question list is empty".to_string(),
        ));
    }

    Ok(questions)
}

/// Parses the full free-text-mode reply. Missing type/role/questions or an
/// empty question list is a malformed generation; non-JSON is a parse error.
pub fn parse_generated_interview(text: &str) -> Result<GeneratedInterview, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(text))
        .map_err(|e| AppError::GenerationParse(e.to_string()))?;

    let generated: GeneratedInterview =
        serde_json::from_value(value).map_err(|e| AppError::MalformedGeneration(e.to_string()))?;

    if generated.questions.is_empty() {
        return Err(AppError::MalformedGeneration(
            "question list is empty".to_string(),
        ));
    }

    // Closed set check; the model replies capitalized, parsing is lenient.
    generated
        .interview_type
        .parse::<InterviewType>()
        .map_err(AppError::MalformedGeneration)?;

    Ok(generated)
}

/// Strips the characters that break the voice runtime's text-to-speech.
/// The prompt already forbids them; this is the enforcement point.
pub fn sanitize_for_voice(text: &str) -> String {
    text.chars().filter(|c| *c != '/' && *c != '*').collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

pub fn build_structured_prompt(request: &StructuredGenerateRequest) -> String {
    STRUCTURED_PROMPT_TEMPLATE
        .replace("{amount}", &request.amount.to_string())
        .replace("{type}", request.interview_type.as_str())
        .replace("{role}", &request.role)
        .replace("{level}", request.level.as_deref().unwrap_or("unspecified"))
        .replace("{techstack}", &request.techstack.join(", "))
        .replace(
            "{additional_info}",
            request.additional_info.as_deref().unwrap_or(""),
        )
}

pub fn build_freeform_prompt(info: &str) -> String {
    FREEFORM_PROMPT_TEMPLATE.replace("{info}", info)
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipelines
// ────────────────────────────────────────────────────────────────────────────

/// Model round trip for structured mode, without persistence.
pub async fn run_structured_generation(
    model: &dyn ChatModel,
    request: &StructuredGenerateRequest,
) -> Result<Vec<String>, AppError> {
    let prompt = build_structured_prompt(request);
    let reply = model
        .complete(&prompt, STRUCTURED_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    let questions: Vec<String> = parse_question_list(&reply)?
        .iter()
        .map(|q| sanitize_for_voice(q))
        .collect();

    if questions.len() != request.amount as usize {
        warn!(
            "Model returned {} questions, {} requested",
            questions.len(),
            request.amount
        );
    }

    Ok(questions)
}

/// Model round trip for free-text mode, without persistence.
pub async fn run_freeform_generation(
    model: &dyn ChatModel,
    info: &str,
) -> Result<GeneratedInterview, AppError> {
    let prompt = build_freeform_prompt(info);
    let reply = model
        .complete(&prompt, FREEFORM_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    let mut generated = parse_generated_interview(&reply)?;
    generated.questions = generated
        .questions
        .iter()
        .map(|q| sanitize_for_voice(q))
        .collect();

    Ok(generated)
}

/// Structured generation: validate → model → INSERT interview.
/// Returns the sanitized question list. The insert is atomic, so a failed
/// generation leaves no partial interview behind.
pub async fn generate_structured(
    pool: &PgPool,
    model: &dyn ChatModel,
    request: StructuredGenerateRequest,
) -> Result<Vec<String>, AppError> {
    validate_structured(&request)?;

    let questions = run_structured_generation(model, &request).await?;

    let interview_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO interviews (id, user_id, role, interview_type, level, tags, questions)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(interview_id)
    .bind(request.user_id)
    .bind(&request.role)
    .bind(request.interview_type.as_str())
    .bind(&request.level)
    .bind(&request.techstack)
    .bind(&questions)
    .execute(pool)
    .await?;

    info!(
        "Generated interview {} with {} questions for user {}",
        interview_id,
        questions.len(),
        request.user_id
    );

    Ok(questions)
}

/// Free-text generation: the model infers everything, then the full
/// interview row is inserted and returned.
pub async fn generate_from_info(
    pool: &PgPool,
    model: &dyn ChatModel,
    request: FreeTextGenerateRequest,
) -> Result<InterviewRow, AppError> {
    if request.info.trim().is_empty() {
        return Err(AppError::Validation("info cannot be empty".to_string()));
    }

    let generated = run_freeform_generation(model, &request.info).await?;

    let interview_type: InterviewType = generated
        .interview_type
        .parse()
        .map_err(AppError::MalformedGeneration)?;

    let interview = sqlx::query_as::<_, InterviewRow>(
        r#"
        INSERT INTO interviews
            (id, user_id, role, interview_type, level, tags, questions, description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(&generated.role)
    .bind(interview_type.as_str())
    .bind(&generated.level)
    .bind(&generated.tags)
    .bind(&generated.questions)
    .bind(&generated.description)
    .fetch_one(pool)
    .await?;

    info!(
        "Generated interview {} ({}, {} questions) for user {}",
        interview.id,
        interview.interview_type,
        interview.questions.len(),
        interview.user_id
    );

    Ok(interview)
}

fn validate_structured(request: &StructuredGenerateRequest) -> Result<(), AppError> {
    if request.role.trim().len() < MIN_ROLE_LEN {
        return Err(AppError::Validation(
            "role must be at least 2 characters".to_string(),
        ));
    }
    if request.amount == 0 || request.amount > MAX_AMOUNT {
        return Err(AppError::Validation(format!(
            "amount must be between 1 and {MAX_AMOUNT}"
        )));
    }
    if request.techstack.is_empty() {
        return Err(AppError::Validation(
            "techstack cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
