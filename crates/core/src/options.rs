//! User-chosen generation options and their wire names.
//!
//! Wire format is camelCase with enum values spelled exactly as the client
//! sends them ("Neutral", "short", "English", ...). Every field has a
//! default so a missing or partial `options` object is valid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested tone of the generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Casual,
    Educational,
    Marketing,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Neutral => "Neutral",
            Tone::Formal => "Formal",
            Tone::Casual => "Casual",
            Tone::Educational => "Educational",
            Tone::Marketing => "Marketing",
        })
    }
}

/// Requested article length, mapped to a target word count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ArticleLength {
    /// Target word count rendered into the prompt.
    pub fn word_target(self) -> u32 {
        match self {
            ArticleLength::Short => 100,
            ArticleLength::Medium => 300,
            ArticleLength::Long => 500,
        }
    }
}

/// Output language of the generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Sinhala,
    Tamil,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::English => "English",
            Language::Sinhala => "Sinhala",
            Language::Tamil => "Tamil",
        })
    }
}

/// Options controlling one generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub tone: Tone,
    pub length: ArticleLength,
    pub language: Language,
    /// Free-text steering from the user; rendered as the literal token
    /// "None" in the prompt when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_guidance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_missing() {
        let opts: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.tone, Tone::Neutral);
        assert_eq!(opts.length, ArticleLength::Medium);
        assert_eq!(opts.language, Language::English);
        assert!(opts.user_guidance.is_none());
    }

    #[test]
    fn parses_client_wire_names() {
        let opts: GenerationOptions = serde_json::from_str(
            r#"{"tone":"Marketing","length":"long","language":"Tamil","userGuidance":"focus on costs"}"#,
        )
        .unwrap();
        assert_eq!(opts.tone, Tone::Marketing);
        assert_eq!(opts.length, ArticleLength::Long);
        assert_eq!(opts.language, Language::Tamil);
        assert_eq!(opts.user_guidance.as_deref(), Some("focus on costs"));
    }

    #[test]
    fn word_targets() {
        assert_eq!(ArticleLength::Short.word_target(), 100);
        assert_eq!(ArticleLength::Medium.word_target(), 300);
        assert_eq!(ArticleLength::Long.word_target(), 500);
    }

    #[test]
    fn rejects_unknown_length() {
        let res = serde_json::from_str::<GenerationOptions>(r#"{"length":"huge"}"#);
        assert!(res.is_err());
    }
}
