use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::provider::{CompletionProvider, LlmError};

/// Hugging Face Inference API client. Models are addressed by id under the
/// base URL; generation is greedy so repeated calls stay comparable.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    max_new_tokens: u32,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String, model: String, base_url: String, max_new_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url,
            max_new_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), self.model);

        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": self.max_new_tokens,
                "do_sample": false,
            },
        });

        debug!("Hugging Face request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
