//! Decoding of inference-host response bodies.
//!
//! Hosted text-generation endpoints answer in several shapes depending on
//! model and deployment: a list of candidates, a single object, or a bare
//! JSON string. Every shape folds into one generated-text string; bodies
//! that match no known shape fold into their compact JSON rendering, so
//! decoding never fails.

use serde::Deserialize;
use serde_json::Value;

/// One generated candidate, the element of list-shaped responses.
#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// Response-body shapes the inference host is known to produce.
#[derive(Debug)]
pub enum CompletionEnvelope {
    /// `[{"generated_text": ...}, ...]` with at least one element.
    GeneratedList(Vec<GeneratedText>),
    /// `{"generated_text": ...}` without the list wrapper.
    Generated(GeneratedText),
    /// A bare JSON string.
    Plain(String),
    /// Anything else, kept verbatim.
    Unrecognized(Value),
}

impl CompletionEnvelope {
    /// Probe a decoded body against the known shapes, most common first.
    /// An empty candidate list is not a usable completion and falls through
    /// to `Unrecognized`.
    pub fn from_value(value: Value) -> Self {
        if let Ok(list) = serde_json::from_value::<Vec<GeneratedText>>(value.clone()) {
            if !list.is_empty() {
                return Self::GeneratedList(list);
            }
        }
        if let Ok(single) = serde_json::from_value::<GeneratedText>(value.clone()) {
            return Self::Generated(single);
        }
        if let Value::String(text) = value {
            return Self::Plain(text);
        }
        Self::Unrecognized(value)
    }

    /// The generated text this envelope carries. List shapes yield their
    /// first candidate.
    pub fn into_text(self) -> String {
        match self {
            Self::GeneratedList(list) => list
                .into_iter()
                .next()
                .map(|candidate| candidate.generated_text)
                .unwrap_or_default(),
            Self::Generated(candidate) => candidate.generated_text,
            Self::Plain(text) => text,
            Self::Unrecognized(value) => value.to_string(),
        }
    }
}

/// Fold a raw response body into generated text. A 2xx body that is not
/// JSON at all already is the generated text.
pub fn completion_text(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => CompletionEnvelope::from_value(value).into_text(),
        Err(_) => body.to_string(),
    }
}
