//! Report Aggregator: pure, deterministic presentation-level summary of a
//! scorecard. No side effects; exactly five categories is a structural
//! property of `Scorecard`, so the mean is always over five scores.

use serde::Serialize;

use crate::feedback::scorecard::{CategoryFeedback, Scorecard};

/// Categories at or above this score count as strengths; below it they are
/// areas for improvement.
pub const STRENGTH_THRESHOLD: f64 = 7.0;

const EXCELLENT_THRESHOLD: f64 = 8.0;
const GOOD_THRESHOLD: f64 = 6.0;

/// Qualitative band for an aggregate score. Thresholds: >= 8 Excellent,
/// >= 6 Good, otherwise Needs Improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceBand {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// One category with its display label, for the two-column strength /
/// improvement partition.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub key: &'static str,
    pub label: &'static str,
    pub score: f64,
}

/// The computed summary attached to report detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub average_score: f64,
    pub band: PerformanceBand,
    pub strengths: Vec<CategoryScore>,
    pub areas_for_improvement: Vec<CategoryScore>,
    pub insights: Vec<&'static str>,
}

/// Mean of the five category scores.
pub fn average_score(scorecard: &Scorecard) -> f64 {
    let categories = scorecard.categories();
    let total: f64 = categories.iter().map(|(_, c)| c.score).sum();
    total / categories.len() as f64
}

/// Classifies an aggregate score into its qualitative band.
pub fn classify(average: f64) -> PerformanceBand {
    if average >= EXCELLENT_THRESHOLD {
        PerformanceBand::Excellent
    } else if average >= GOOD_THRESHOLD {
        PerformanceBand::Good
    } else {
        PerformanceBand::NeedsImprovement
    }
}

/// Key-insight strings shown alongside the overall score.
pub fn key_insights(band: PerformanceBand) -> Vec<&'static str> {
    match band {
        PerformanceBand::Excellent => vec![
            "Exceptional performance across key areas",
            "Strong candidate for immediate consideration",
            "Demonstrates advanced expertise",
        ],
        PerformanceBand::Good => vec![
            "Solid foundation with room for growth",
            "Potential for development in specific areas",
            "Consider for junior to mid-level positions",
        ],
        PerformanceBand::NeedsImprovement => vec![
            "Requires significant improvement",
            "Additional training recommended",
            "Consider reassessment after preparation",
        ],
    }
}

/// Builds the full presentation summary: average, band, strength /
/// improvement partition, and insights.
pub fn summarize(scorecard: &Scorecard) -> ReportSummary {
    let average = average_score(scorecard);
    let band = classify(average);

    let labeled = |key: &'static str, category: &CategoryFeedback| CategoryScore {
        key,
        label: category_label(key),
        score: category.score,
    };

    let mut strengths = Vec::new();
    let mut areas_for_improvement = Vec::new();
    for (key, category) in scorecard.categories() {
        if category.score >= STRENGTH_THRESHOLD {
            strengths.push(labeled(key, category));
        } else {
            areas_for_improvement.push(labeled(key, category));
        }
    }

    ReportSummary {
        average_score: average,
        band,
        strengths,
        areas_for_improvement,
        insights: key_insights(band),
    }
}

fn category_label(key: &str) -> &'static str {
    match key {
        "communication_skills" => "Communication Skills",
        "technical_knowledge" => "Technical Knowledge",
        "problem_solving" => "Problem Solving",
        "cultural_fit" => "Cultural Fit",
        _ => "Confidence & Clarity",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::scorecard::MAX_SCORE;

    fn scorecard_with_scores(scores: [f64; 5]) -> Scorecard {
        let category = |score: f64| CategoryFeedback {
            score,
            comments: String::new(),
            areas_for_improvement: Vec::new(),
        };
        Scorecard {
            communication_skills: category(scores[0]),
            technical_knowledge: category(scores[1]),
            problem_solving: category(scores[2]),
            cultural_fit: category(scores[3]),
            confidence_and_clarity: category(scores[4]),
        }
    }

    #[test]
    fn test_average_is_mean_of_five_scores() {
        let scorecard = scorecard_with_scores([8.0, 6.0, 7.0, 9.0, 5.0]);
        let average = average_score(&scorecard);
        assert!((average - 7.0).abs() < f64::EPSILON, "average was {average}");
    }

    #[test]
    fn test_average_stays_within_scale() {
        let scorecard = scorecard_with_scores([10.0, 10.0, 10.0, 10.0, 10.0]);
        let average = average_score(&scorecard);
        assert!(average >= 0.0 && average <= MAX_SCORE);
    }

    #[test]
    fn test_average_is_idempotent() {
        let scorecard = scorecard_with_scores([7.3, 6.1, 8.8, 5.5, 9.2]);
        let first = average_score(&scorecard);
        let second = average_score(&scorecard);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(classify(8.0), PerformanceBand::Excellent);
        assert_eq!(classify(9.9), PerformanceBand::Excellent);
        assert_eq!(classify(7.9), PerformanceBand::Good);
        assert_eq!(classify(6.0), PerformanceBand::Good);
        assert_eq!(classify(5.9), PerformanceBand::NeedsImprovement);
        assert_eq!(classify(0.0), PerformanceBand::NeedsImprovement);
    }

    #[test]
    fn test_band_classification_is_monotonic() {
        fn rank(band: PerformanceBand) -> u8 {
            match band {
                PerformanceBand::NeedsImprovement => 0,
                PerformanceBand::Good => 1,
                PerformanceBand::Excellent => 2,
            }
        }
        let mut previous = rank(classify(0.0));
        let mut score = 0.0;
        while score <= MAX_SCORE {
            let current = rank(classify(score));
            assert!(
                current >= previous,
                "band rank decreased at average {score}"
            );
            previous = current;
            score += 0.1;
        }
    }

    #[test]
    fn test_strength_partition_at_threshold() {
        // 7.0 counts as a strength, 6.9 does not.
        let scorecard = scorecard_with_scores([7.0, 6.9, 9.0, 3.0, 7.1]);
        let summary = summarize(&scorecard);
        let strength_keys: Vec<&str> = summary.strengths.iter().map(|c| c.key).collect();
        let improvement_keys: Vec<&str> = summary
            .areas_for_improvement
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            strength_keys,
            vec![
                "communication_skills",
                "problem_solving",
                "confidence_and_clarity"
            ]
        );
        assert_eq!(improvement_keys, vec!["technical_knowledge", "cultural_fit"]);
    }

    #[test]
    fn test_fallback_scorecard_classifies_as_good() {
        let summary = summarize(&Scorecard::fallback());
        assert!((summary.average_score - 7.0).abs() < f64::EPSILON);
        assert_eq!(summary.band, PerformanceBand::Good);
        assert_eq!(summary.strengths.len(), 5);
        assert!(summary.areas_for_improvement.is_empty());
    }

    #[test]
    fn test_band_serializes_display_labels() {
        let json = serde_json::to_string(&PerformanceBand::NeedsImprovement).unwrap();
        assert_eq!(json, r#""Needs Improvement""#);
    }
}
