//! Shared application state.

use schreiber_core::Config;
use schreiber_extract::Extractor;
use schreiber_llm::ArticleGenerator;
use tokio::sync::Semaphore;
use tracing::warn;

pub struct AppState {
    pub extractor: Extractor,
    /// Present only when the inference credential is configured.
    pub generator: Option<ArticleGenerator>,
    /// One permit: a single in-flight generation, later requests are
    /// rejected instead of queued behind the slow upstream call.
    pub generation_slot: Semaphore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let generator = match ArticleGenerator::from_config(&config.inference) {
            Ok(g) => Some(g),
            Err(e) => {
                warn!("Article generator not available: {} — POST /api/generate will return 503", e);
                None
            }
        };
        Self {
            extractor: Extractor::new(config.extract.clone()),
            generator,
            generation_slot: Semaphore::new(1),
        }
    }
}
