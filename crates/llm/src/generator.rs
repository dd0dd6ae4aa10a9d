//! End-to-end article generation: prompt, completion, interpretation.

use schreiber_core::config::InferenceConfig;
use schreiber_core::GenerationOptions;
use tracing::{debug, info};

use crate::envelope::completion_text;
use crate::interpret::{interpret, GenerationOutcome};
use crate::prompt::build_prompt;
use crate::provider::{CompletionProvider, LlmError};

/// Turns bounded source text plus options into an article via one
/// completion call against the configured provider.
pub struct ArticleGenerator {
    provider: Box<dyn CompletionProvider>,
}

impl ArticleGenerator {
    pub fn new(provider: Box<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Build from config, creating the configured provider.
    pub fn from_config(config: &InferenceConfig) -> Result<Self, LlmError> {
        let provider = crate::providers::create_provider(config)?;
        Ok(Self::new(provider))
    }

    /// Generate one article from source text.
    pub async fn generate(
        &self,
        source_text: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationOutcome, LlmError> {
        let prompt = build_prompt(source_text, options);
        info!(
            "Generating article: {} source chars, tone {}, {} words",
            source_text.chars().count(),
            options.tone,
            options.length.word_target()
        );

        let body = self.provider.complete(&prompt).await?;
        let generated = completion_text(&body);
        debug!("Generated text: {}", generated);

        Ok(interpret(&generated))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct ScriptedProvider {
        body: String,
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.body.clone())
        }
    }

    fn scripted(body: &str) -> ArticleGenerator {
        ArticleGenerator::new(Box::new(ScriptedProvider {
            body: body.to_string(),
        }))
    }

    #[tokio::test]
    async fn structured_article_from_list_envelope() {
        let body =
            r#"[{"generated_text":"{\"title\":\"T\",\"subheadings\":[\"s\"],\"article\":\"A\"}"}]"#;
        let outcome = scripted(body)
            .generate("source", &GenerationOptions::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Structured(article) => {
                assert_eq!(article.title.as_deref(), Some("T"));
                assert_eq!(article.article.as_deref(), Some("A"));
            }
            GenerationOutcome::Unstructured(_) => panic!("expected structured outcome"),
        }
    }

    #[tokio::test]
    async fn plain_completion_falls_back_to_unstructured() {
        let outcome = scripted(r#""hello world""#)
            .generate("source", &GenerationOptions::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Unstructured(raw) => assert_eq!(raw, "hello world"),
            GenerationOutcome::Structured(_) => panic!("expected raw fallback"),
        }
    }

    #[tokio::test]
    async fn provider_errors_surface_unchanged() {
        struct FailingProvider;

        #[async_trait]
        impl CompletionProvider for FailingProvider {
            async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
                Err(LlmError::ApiError {
                    status: 503,
                    body: "overloaded".into(),
                })
            }
        }

        let generator = ArticleGenerator::new(Box::new(FailingProvider));
        let err = generator
            .generate("source", &GenerationOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ApiError { status: 503, .. }));
    }

    #[tokio::test]
    async fn provider_receives_the_rendered_prompt() {
        struct EchoProvider;

        #[async_trait]
        impl CompletionProvider for EchoProvider {
            async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
                Ok(prompt.to_string())
            }
        }

        let generator = ArticleGenerator::new(Box::new(EchoProvider));
        let outcome = generator
            .generate("unique source marker", &GenerationOptions::default())
            .await
            .unwrap();
        match outcome {
            GenerationOutcome::Unstructured(raw) => {
                assert!(raw.contains("unique source marker"));
                assert!(raw.contains("User guidance: None"));
            }
            GenerationOutcome::Structured(_) => panic!("an echoed prompt is not JSON"),
        }
    }

    #[test]
    fn from_config_requires_the_credential() {
        let config = InferenceConfig {
            api_key: None,
            model: "google/flan-t5-small".to_string(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            max_new_tokens: 800,
        };
        let err = ArticleGenerator::from_config(&config).err();
        assert!(matches!(err, Some(LlmError::NotConfigured(_))));
    }

    #[test]
    fn from_config_builds_with_a_credential() {
        let config = InferenceConfig {
            api_key: Some("hf_test".to_string()),
            model: "google/flan-t5-small".to_string(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            max_new_tokens: 800,
        };
        assert!(ArticleGenerator::from_config(&config).is_ok());
    }
}
