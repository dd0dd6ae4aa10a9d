use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub extract: ExtractConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            inference: InferenceConfig::from_env(),
            extract: ExtractConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs. The inference credential
    /// is reported only as configured yes/no, never by value.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  server:     host={}, port={}, cors_origin={}",
            self.server.host,
            self.server.port,
            self.server.cors_origin
        );
        tracing::info!(
            "  inference:  model={}, base_url={}, max_new_tokens={}, configured={}",
            self.inference.model,
            self.inference.base_url,
            self.inference.max_new_tokens,
            self.inference.is_configured()
        );
        tracing::info!(
            "  extract:    user_agent={}, transcript_proxy={}",
            self.extract.user_agent,
            self.extract.transcript_proxy_url
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3001),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── Inference endpoint ────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Bearer credential for the inference endpoint. Absent = generation disabled.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_new_tokens: u32,
}

impl InferenceConfig {
    fn from_env() -> Self {
        Self {
            api_key: env_opt("HF_API_KEY"),
            model: env_or("HF_MODEL", "google/flan-t5-small"),
            base_url: env_or("HF_BASE_URL", "https://api-inference.huggingface.co/models"),
            max_new_tokens: env_u32("HF_MAX_NEW_TOKENS", 800),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// ── Extraction ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Sent on website fetches so plain scrapers aren't rejected outright.
    pub user_agent: String,
    /// Read-proxy base used for the single transcript-fetch attempt.
    pub transcript_proxy_url: String,
}

impl ExtractConfig {
    fn from_env() -> Self {
        Self {
            user_agent: env_or("EXTRACT_USER_AGENT", "Mozilla/5.0"),
            transcript_proxy_url: env_or("TRANSCRIPT_PROXY_URL", "https://r.jina.ai"),
        }
    }
}
