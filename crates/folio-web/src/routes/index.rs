//! Review page route handler.
//!
//! Serves the embedded review form HTML.

use axum::response::{Html, IntoResponse};

const REVIEW_PAGE_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the portfolio review page.
pub async fn index() -> impl IntoResponse {
    Html(REVIEW_PAGE_HTML)
}
