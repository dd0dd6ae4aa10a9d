use async_trait::async_trait;

/// Trait for completion backends — each inference host implements this.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt and return the raw completion text. Implementations
    /// return the response body as-is; decoding the host's response shape
    /// belongs to the envelope layer, not here.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} — {body}")]
    ApiError { status: u16, body: String },
    #[error("provider not configured: {0}")]
    NotConfigured(String),
}
