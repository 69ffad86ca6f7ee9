//! Response construction.
//!
//! # Responsibilities
//! - Build HTML responses with the correct content type
//! - Attach caching headers appropriate for compiled-in content
//!
//! # Design Decisions
//! - Page content is fixed at build time, so responses are cacheable
//! - The not-found fallback is uncacheable to keep bad links visible

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// A successful page response.
pub fn page(html: String) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        )],
        Html(html),
    )
        .into_response()
}

/// The fallback response for an unmatched path.
pub fn not_found(html: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))],
        Html(html),
    )
        .into_response()
}

/// Rejection for methods other than GET/HEAD.
pub fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}
