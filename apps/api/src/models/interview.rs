use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of interview types. Stored lowercase in the database;
/// the generation model may reply with capitalized names, so parsing is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical,
    Behavioral,
    Mixed,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "technical" => Ok(InterviewType::Technical),
            "behavioral" => Ok(InterviewType::Behavioral),
            "mixed" => Ok(InterviewType::Mixed),
            other => Err(format!("unknown interview type '{other}'")),
        }
    }
}

/// A generated question set owned by one user.
///
/// `questions` and `interview_type` are immutable post-creation;
/// role/description/tags are user-editable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: Option<String>,
    pub tags: Vec<String>,
    pub questions: Vec<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_type_parses_case_insensitively() {
        assert_eq!(
            "Technical".parse::<InterviewType>().unwrap(),
            InterviewType::Technical
        );
        assert_eq!(
            "BEHAVIORAL".parse::<InterviewType>().unwrap(),
            InterviewType::Behavioral
        );
        assert_eq!(
            "mixed".parse::<InterviewType>().unwrap(),
            InterviewType::Mixed
        );
    }

    #[test]
    fn test_interview_type_rejects_unknown_value() {
        assert!("panel".parse::<InterviewType>().is_err());
    }

    #[test]
    fn test_interview_type_serializes_lowercase() {
        let json = serde_json::to_string(&InterviewType::Technical).unwrap();
        assert_eq!(json, r#""technical""#);
    }

    #[test]
    fn test_interview_row_serializes_type_field_name() {
        let row = InterviewRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role: "Backend Engineer".to_string(),
            interview_type: "technical".to_string(),
            level: Some("mid".to_string()),
            tags: vec!["Go".to_string(), "Postgres".to_string()],
            questions: vec!["Q1".to_string()],
            description: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], "technical");
        assert!(value.get("interview_type").is_none());
    }

    #[test]
    fn test_tag_order_preserved_through_serde_round_trip() {
        let row = InterviewRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role: "Frontend Developer".to_string(),
            interview_type: "mixed".to_string(),
            level: None,
            tags: vec!["React".to_string(), "Backend".to_string()],
            questions: vec!["Q1".to_string(), "Q2".to_string()],
            description: Some("desc".to_string()),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let recovered: InterviewRow = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.tags, vec!["React", "Backend"]);
        assert_eq!(recovered.questions, vec!["Q1", "Q2"]);
    }
}
