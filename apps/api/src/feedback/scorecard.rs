//! The fixed five-category feedback scorecard embedded in every report.
//!
//! Scores are on a 0-10 scale. The scorecard is a value object, never an
//! independently addressable entity; `serde` enforces that all five
//! categories are present, so a partial model reply fails deserialization
//! and the caller substitutes `Scorecard::fallback()`.

use serde::{Deserialize, Serialize};

/// Highest score a category can carry.
pub const MAX_SCORE: f64 = 10.0;

/// Feedback for one rubric category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFeedback {
    pub score: f64,
    pub comments: String,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
}

/// The five fixed rubric categories. All are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub communication_skills: CategoryFeedback,
    pub technical_knowledge: CategoryFeedback,
    pub problem_solving: CategoryFeedback,
    pub cultural_fit: CategoryFeedback,
    pub confidence_and_clarity: CategoryFeedback,
}

impl Scorecard {
    /// The documented default used whenever the model reply cannot be parsed
    /// into a well-formed scorecard. Guarantees a report is always produced
    /// once a session finishes with a non-empty transcript.
    pub fn fallback() -> Self {
        let category = |comments: &str| CategoryFeedback {
            score: 7.0,
            comments: comments.to_string(),
            areas_for_improvement: Vec::new(),
        };

        Scorecard {
            communication_skills: category(
                "Good communication skills demonstrated during the interview.",
            ),
            technical_knowledge: category("Showed adequate technical knowledge for the role."),
            problem_solving: category("Demonstrated problem-solving abilities."),
            cultural_fit: category("Would likely fit well within the team culture."),
            confidence_and_clarity: category("Spoke with confidence and clarity."),
        }
    }

    /// True when every category score lies on the 0-10 scale.
    pub fn scores_in_range(&self) -> bool {
        self.categories()
            .iter()
            .all(|(_, category)| (0.0..=MAX_SCORE).contains(&category.score))
    }

    /// Categories in display order, paired with their snake_case keys.
    pub fn categories(&self) -> [(&'static str, &CategoryFeedback); 5] {
        [
            ("communication_skills", &self.communication_skills),
            ("technical_knowledge", &self.technical_knowledge),
            ("problem_solving", &self.problem_solving),
            ("cultural_fit", &self.cultural_fit),
            ("confidence_and_clarity", &self.confidence_and_clarity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorecard_requires_all_five_categories() {
        let partial = r#"{
            "communication_skills": {"score": 8, "comments": "clear"},
            "technical_knowledge": {"score": 7, "comments": "solid"}
        }"#;
        let result: Result<Scorecard, _> = serde_json::from_str(partial);
        assert!(result.is_err(), "partial scorecard must fail to parse");
    }

    #[test]
    fn test_scorecard_areas_for_improvement_defaults_empty() {
        let json = r#"{
            "communication_skills": {"score": 8, "comments": "a"},
            "technical_knowledge": {"score": 7, "comments": "b"},
            "problem_solving": {"score": 6, "comments": "c"},
            "cultural_fit": {"score": 9, "comments": "d"},
            "confidence_and_clarity": {"score": 5, "comments": "e", "areas_for_improvement": ["pace"]}
        }"#;
        let scorecard: Scorecard = serde_json::from_str(json).unwrap();
        assert!(scorecard.communication_skills.areas_for_improvement.is_empty());
        assert_eq!(
            scorecard.confidence_and_clarity.areas_for_improvement,
            vec!["pace"]
        );
    }

    #[test]
    fn test_scores_in_range_rejects_out_of_scale_values() {
        let mut scorecard = Scorecard::fallback();
        assert!(scorecard.scores_in_range());
        scorecard.technical_knowledge.score = 100.0;
        assert!(!scorecard.scores_in_range());
        scorecard.technical_knowledge.score = -1.0;
        assert!(!scorecard.scores_in_range());
    }

    #[test]
    fn test_fallback_is_uniform_seven_with_empty_improvements() {
        let fallback = Scorecard::fallback();
        for (_, category) in fallback.categories() {
            assert_eq!(category.score, 7.0);
            assert!(!category.comments.is_empty());
            assert!(category.areas_for_improvement.is_empty());
        }
    }

    #[test]
    fn test_categories_are_in_display_order() {
        let fallback = Scorecard::fallback();
        let keys: Vec<&str> = fallback.categories().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "communication_skills",
                "technical_knowledge",
                "problem_solving",
                "cultural_fit",
                "confidence_and_clarity"
            ]
        );
    }
}
