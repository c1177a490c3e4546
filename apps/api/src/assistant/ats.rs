//! ATS keyword matching: coverage of a fixed reference keyword list by free text.
//!
//! Matching is a plain case-insensitive substring test. "Git" matches "GitHub" and
//! "API" matches "rapid"; there is no tokenization, stemming, or word-boundary check.

use crate::models::suggestion::AtsAnalysis;

/// Reference list used when no override is configured.
pub const DEFAULT_ATS_KEYWORDS: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "API",
    "frontend",
    "responsive design",
    "Git",
    "agile",
    "testing",
];

pub fn default_keywords() -> Vec<String> {
    DEFAULT_ATS_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Partitions `reference` into matched and missing keywords, keeping the reference order.
///
/// score = round(100 × matched / reference), 0 for an empty reference list.
pub fn match_keywords(text: &str, reference: &[String]) -> AtsAnalysis {
    let text_lower = text.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = reference
        .iter()
        .cloned()
        .partition(|keyword| text_lower.contains(&keyword.to_lowercase()));

    let score = if reference.is_empty() {
        0
    } else {
        ((matched.len() as f64 / reference.len() as f64) * 100.0).round() as u8
    };

    let suggestions = missing.iter().map(|k| missing_keyword_suggestion(k)).collect();

    AtsAnalysis {
        score,
        matched_keywords: matched,
        missing_keywords: missing,
        suggestions,
    }
}

fn missing_keyword_suggestion(keyword: &str) -> String {
    format!("Consider adding experience with {keyword} to your resume.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_partition_preserves_reference_order() {
        let reference = keywords(&["Rust", "Kafka", "SQL", "Go"]);
        let analysis = match_keywords("go, sql and rust", &reference);
        assert_eq!(analysis.matched_keywords, keywords(&["Rust", "SQL", "Go"]));
        assert_eq!(analysis.missing_keywords, keywords(&["Kafka"]));
        assert_eq!(analysis.score, 75);
    }

    #[test]
    fn test_partition_covers_reference_exactly_once() {
        let reference = default_keywords();
        let analysis = match_keywords("React and TypeScript with Git", &reference);
        let mut union = analysis.matched_keywords.clone();
        union.extend(analysis.missing_keywords.clone());
        union.sort();
        let mut expected = reference.clone();
        expected.sort();
        assert_eq!(union, expected);
        assert!(analysis
            .matched_keywords
            .iter()
            .all(|k| !analysis.missing_keywords.contains(k)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let analysis = match_keywords("REACT developer", &keywords(&["react", "React"]));
        assert_eq!(analysis.matched_keywords.len(), 2);
        assert_eq!(analysis.score, 100);
    }

    #[test]
    fn test_substring_match_has_no_word_boundaries() {
        let analysis = match_keywords("Maintained GitHub repos and rapid prototypes", &default_keywords());
        assert!(analysis.matched_keywords.contains(&"Git".to_string()));
        assert!(analysis.matched_keywords.contains(&"API".to_string()));
    }

    #[test]
    fn test_suggestions_follow_missing_keywords() {
        let analysis = match_keywords("", &keywords(&["Docker", "AWS"]));
        assert_eq!(analysis.score, 0);
        assert_eq!(
            analysis.suggestions,
            vec![
                "Consider adding experience with Docker to your resume.".to_string(),
                "Consider adding experience with AWS to your resume.".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_reference_scores_zero() {
        let analysis = match_keywords("anything at all", &[]);
        assert_eq!(analysis.score, 0);
        assert!(analysis.matched_keywords.is_empty());
        assert!(analysis.missing_keywords.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        // 1 of 3 → 33.3 → 33; 2 of 3 → 66.7 → 67
        let reference = keywords(&["a1", "b2", "c3"]);
        assert_eq!(match_keywords("a1", &reference).score, 33);
        assert_eq!(match_keywords("a1 b2", &reference).score, 67);
    }

    #[test]
    fn test_score_never_drops_as_text_covers_more_keywords() {
        let reference = default_keywords();
        let mut text = String::new();
        let mut last = match_keywords(&text, &reference).score;
        for keyword in &reference {
            text.push(' ');
            text.push_str(keyword);
            let score = match_keywords(&text, &reference).score;
            assert!(score >= last, "score dropped from {last} to {score}");
            last = score;
        }
        assert_eq!(last, 100);
    }
}
