//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area. Shared error types
//! live here in mod.rs.

mod extract;
mod generate;
mod health;

pub mod doc;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

// ── Shared types ─────────────────────────────────────────────────

/// Error body every endpoint returns: a message, optionally carrying the
/// upstream diagnostic that caused it.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub(crate) fn error_response(
    status: StatusCode,
    error: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            details: None,
        }),
    )
}

// ── Re-exports ───────────────────────────────────────────────────

pub use extract::extract;
pub use generate::generate;
pub use health::health;
