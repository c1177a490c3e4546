use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate piece of resume text offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub text: String,
    /// 0 – 100
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl AiSuggestion {
    pub fn new(text: impl Into<String>, confidence: u8, keywords: &[&str]) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.min(100),
            keywords: Some(keywords.iter().map(|k| k.to_string()).collect()),
        }
    }
}

/// Voice of a generated cover letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Conversational,
    Enthusiastic,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Enthusiastic => "enthusiastic",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    pub cover_letter: String,
    pub tone: Tone,
    pub keywords: Vec<String>,
}

/// Keyword coverage of a resume against a reference keyword list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    /// 0 – 100
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}
