use serde::{Deserialize, Serialize};

/// Structured article data as requested from the model: a title, ordered
/// subheadings, and the article body. `raw` carries the unparsed model text
/// on the fallback path. Any subset of fields may be absent — a result with
/// neither `article` nor `raw` renders as an empty body, it is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub subheadings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ArticleResult {
    /// True when there is body text to render (`article` or `raw`).
    pub fn is_renderable(&self) -> bool {
        self.article.is_some() || self.raw.is_some()
    }
}
