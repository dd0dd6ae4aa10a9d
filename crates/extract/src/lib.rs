//! Source acquisition and text normalization.
//!
//! Turns a [`SourceDescriptor`] (PDF bytes, website URL, or YouTube URL)
//! into a single bounded plain-text string, ready for prompt building.
//! Empty normalized text is always surfaced as an error, never returned as
//! a silent empty success.

mod pdf;
mod web;
mod youtube;

pub use pdf::PDF_TEXT_CAP;
pub use web::WEB_TEXT_CAP;

use reqwest::header::USER_AGENT;
use schreiber_core::config::ExtractConfig;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("source contains no extractable text")]
    NoExtractableText,
    #[error("Could not fetch transcript — please paste transcript text")]
    TranscriptUnavailable,
}

/// One source to extract text from. Exactly one variant per request.
#[derive(Debug, Clone)]
pub enum SourceDescriptor {
    /// Raw bytes of an uploaded `.pdf` file.
    Pdf(Vec<u8>),
    /// Absolute URL of a web article.
    Website(String),
    /// YouTube URL, or a raw 11-character video id.
    Youtube(String),
}

/// Acquires raw content for a source and normalizes it to plain text.
pub struct Extractor {
    http: reqwest::Client,
    config: ExtractConfig,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Acquire and normalize one source.
    pub async fn extract(&self, source: SourceDescriptor) -> Result<String, ExtractError> {
        match source {
            SourceDescriptor::Pdf(bytes) => {
                let pages = pdf::extract_pages(&bytes)?;
                let text = pdf::flatten_pages(&pages);
                info!(
                    "PDF normalized: {} pages, {} chars",
                    pages.len(),
                    text.chars().count()
                );
                if text.is_empty() {
                    return Err(ExtractError::NoExtractableText);
                }
                Ok(text)
            }
            SourceDescriptor::Website(url) => {
                let html = self.fetch_website(&url).await?;
                let text = web::normalize_html(&html);
                info!("Website normalized: {} chars from {}", text.chars().count(), url);
                if text.is_empty() {
                    return Err(ExtractError::NoExtractableText);
                }
                Ok(text)
            }
            SourceDescriptor::Youtube(input) => self.fetch_transcript(&input).await,
        }
    }

    /// Single GET with a browser-identifying User-Agent. Redirects are left
    /// to the client's default cap; non-2xx statuses are fetch errors.
    async fn fetch_website(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Exactly one transcript-fetch attempt through the read proxy. Network
    /// errors, non-2xx statuses, and empty bodies all collapse into
    /// `TranscriptUnavailable` so the caller can offer the manual-paste
    /// fallback instead of a generic failure.
    async fn fetch_transcript(&self, input: &str) -> Result<String, ExtractError> {
        let video_id = youtube::video_id(input);
        let url = youtube::transcript_url(&self.config.transcript_proxy_url, &video_id);
        info!("Fetching transcript for video {}", video_id);

        let transcript = match self.fetch_text(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("transcript fetch failed: {}", e);
                return Err(ExtractError::TranscriptUnavailable);
            }
        };

        if transcript.trim().is_empty() {
            return Err(ExtractError::TranscriptUnavailable);
        }
        Ok(transcript)
    }

    async fn fetch_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.http.get(url).send().await?.error_for_status()?.text().await
    }
}
