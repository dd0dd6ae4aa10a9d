pub mod huggingface;

use schreiber_core::config::InferenceConfig;

use crate::provider::{CompletionProvider, LlmError};

/// Create the completion provider for the configured inference host.
pub fn create_provider(config: &InferenceConfig) -> Result<Box<dyn CompletionProvider>, LlmError> {
    let api_key = config
        .api_key
        .as_ref()
        .ok_or_else(|| LlmError::NotConfigured("HF_API_KEY not set".into()))?;
    Ok(Box::new(huggingface::HuggingFaceProvider::new(
        api_key.clone(),
        config.model.clone(),
        config.base_url.clone(),
        config.max_new_tokens,
    )))
}
