pub mod article;
pub mod config;
pub mod options;
pub mod text;

pub use article::ArticleResult;
pub use config::Config;
pub use options::{ArticleLength, GenerationOptions, Language, Tone};
