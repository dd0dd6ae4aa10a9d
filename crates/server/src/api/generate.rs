//! Article generation endpoint.
//!
//! Takes the normalized source text plus user options and runs one
//! completion against the configured inference endpoint. Structured model
//! output lands in `result`; text the model returned in some other shape
//! lands in `raw` — both are 200s, only endpoint failures are errors.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use schreiber_core::{ArticleResult, GenerationOptions};
use schreiber_llm::{GenerationOutcome, LlmError};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

use super::{error_response, ErrorResponse};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateRequest {
    pub text: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub options: GenerationOptions,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    pub ok: bool,
    /// Structured article when the model obeyed the requested JSON shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub result: Option<ArticleResult>,
    /// Verbatim model text when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Generate an article from extracted text
///
/// Responds `{ok, result}` when the model returned the requested JSON
/// shape and `{ok, raw}` when it returned anything else.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated article, structured or raw", body = GenerateResponse),
        (status = 400, description = "Missing source text", body = ErrorResponse),
        (status = 429, description = "A generation is already in flight", body = ErrorResponse),
        (status = 502, description = "Inference endpoint failure", body = ErrorResponse),
        (status = 503, description = "Inference credential not configured", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let text = req
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "text required"))?;

    let generator = state.generator.as_ref().ok_or_else(|| {
        error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Article generation not configured. Set HF_API_KEY.",
        )
    })?;

    // Single-slot guard: one in-flight generation, later submits are
    // rejected rather than queued behind the slow upstream call.
    let _permit = state.generation_slot.try_acquire().map_err(|_| {
        error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "A generation is already in progress",
        )
    })?;

    let outcome = generator
        .generate(&text, &req.options)
        .await
        .map_err(map_llm_error)?;

    Ok(Json(match outcome {
        GenerationOutcome::Structured(result) => GenerateResponse {
            ok: true,
            result: Some(result),
            raw: None,
        },
        GenerationOutcome::Unstructured(raw) => GenerateResponse {
            ok: true,
            result: None,
            raw: Some(raw),
        },
    }))
}

fn map_llm_error(err: LlmError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        LlmError::ApiError { status, body } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("LLM error ({status})"),
                details: Some(body),
            }),
        ),
        LlmError::HttpError(e) => error_response(StatusCode::BAD_GATEWAY, e.to_string()),
        LlmError::NotConfigured(msg) => error_response(StatusCode::SERVICE_UNAVAILABLE, msg),
    }
}
