pub mod envelope;
pub mod generator;
pub mod interpret;
pub mod prompt;
pub mod provider;
pub mod providers;

pub use generator::ArticleGenerator;
pub use interpret::GenerationOutcome;
pub use provider::{CompletionProvider, LlmError};
