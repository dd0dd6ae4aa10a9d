//! Text extraction endpoint.
//!
//! One route, three source kinds selected by the `mode` query parameter:
//! `website` and `youtube` take JSON bodies, anything else is treated as a
//! multipart PDF upload. Bodies are pulled from the raw request after
//! dispatch so that every validation failure keeps the JSON error shape.

use std::sync::Arc;

use axum::extract::{FromRequest, Multipart, Query, Request, State};
use axum::http::StatusCode;
use axum::Json;
use schreiber_extract::{ExtractError, SourceDescriptor};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

use super::{error_response, ErrorResponse};

#[derive(Deserialize)]
pub struct ExtractQuery {
    pub mode: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct WebsiteExtractRequest {
    pub url: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YoutubeExtractRequest {
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ExtractResponse {
    pub text: String,
}

/// Extract bounded plain text from a source
///
/// `mode=website` expects `{url}`, `mode=youtube` expects `{videoUrl}`;
/// any other (or absent) mode expects a multipart upload with a `file`
/// field holding the PDF.
#[utoipa::path(
    post,
    path = "/api/extract",
    tag = "Extract",
    params(("mode" = Option<String>, Query, description = "Source kind: website, youtube, or omitted for PDF upload")),
    responses(
        (status = 200, description = "Normalized plain text", body = ExtractResponse),
        (status = 400, description = "Missing or unreadable source", body = ErrorResponse),
        (status = 422, description = "Source yields no usable text", body = ErrorResponse),
        (status = 500, description = "Source fetch failed", body = ErrorResponse)
    )
)]
pub async fn extract(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExtractQuery>,
    request: Request,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    match query.mode.as_deref() {
        Some("website") => extract_website(&state, request).await,
        Some("youtube") => extract_youtube(&state, request).await,
        _ => extract_pdf(&state, request).await,
    }
}

async fn extract_website(
    state: &AppState,
    request: Request,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req): Json<WebsiteExtractRequest> = Json::from_request(request, &())
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let url = req
        .url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "url required"))?;

    run_extract(state, SourceDescriptor::Website(url)).await
}

async fn extract_youtube(
    state: &AppState,
    request: Request,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(req): Json<YoutubeExtractRequest> = Json::from_request(request, &())
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let video_url = req
        .video_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "videoUrl required"))?;

    run_extract(state, SourceDescriptor::Youtube(video_url)).await
}

async fn extract_pdf(
    state: &AppState,
    request: Request,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut pdf_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field.bytes().await.map_err(|e| {
                error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {e}"))
            })?;
            pdf_bytes = Some(bytes.to_vec());
            break;
        }
    }

    let bytes =
        pdf_bytes.ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "pdf file missing"))?;

    run_extract(state, SourceDescriptor::Pdf(bytes)).await
}

async fn run_extract(
    state: &AppState,
    source: SourceDescriptor,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let text = state
        .extractor
        .extract(source)
        .await
        .map_err(map_extract_error)?;
    Ok(Json(ExtractResponse { text }))
}

fn map_extract_error(err: ExtractError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ExtractError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ExtractError::Pdf(_) => StatusCode::BAD_REQUEST,
        ExtractError::NoExtractableText | ExtractError::TranscriptUnavailable => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    error_response(status, err.to_string())
}
