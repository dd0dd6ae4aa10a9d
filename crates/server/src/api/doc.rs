//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "schreiber API",
        version = "0.1.0",
        description = "Turns a PDF, web article, or YouTube transcript into an AI-generated article.",
    ),
    tags(
        (name = "Health", description = "Server readiness"),
        (name = "Extract", description = "Bounded plain-text extraction from PDF, website, or YouTube sources"),
        (name = "Generate", description = "Article generation via the configured inference endpoint"),
    ),
    paths(
        crate::api::health::health,
        crate::api::extract::extract,
        crate::api::generate::generate,
    ),
    components(schemas(
        crate::api::ErrorResponse,
        crate::api::health::HealthResponse,
        crate::api::extract::WebsiteExtractRequest,
        crate::api::extract::YoutubeExtractRequest,
        crate::api::extract::ExtractResponse,
        crate::api::generate::GenerateRequest,
        crate::api::generate::GenerateResponse,
    ))
)]
pub struct ApiDoc;
