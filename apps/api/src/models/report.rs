use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Feedback for one completed interview attempt. Immutable after insert;
/// multiple reports per interview are allowed (repeat attempts append).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub interview_id: Uuid,
    pub feedback: Value,
    pub created_at: DateTime<Utc>,
}

/// Report joined with the metadata of the interview it belongs to,
/// for listing and results views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportWithInterviewRow {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub feedback: Value,
    pub created_at: DateTime<Utc>,
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: Option<String>,
    pub tags: Vec<String>,
}
