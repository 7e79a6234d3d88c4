//! Analyze route handler.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use folio_core::markdown;
use folio_core::prompt::build_review_prompt;
use folio_core::review::model::{ReviewOutcome, ReviewRequest};
use folio_gemini::{resolve_model, GeminiError};

use crate::state::AppState;

/// POST /analyze - Run one portfolio review.
///
/// Failures are reported inside the JSON body (`{"error": ...}`)
/// alongside the status code, because clients read the body either way.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> (StatusCode, Json<ReviewOutcome>) {
    let Some(gemini) = state.gemini.clone() else {
        return failure(
            StatusCode::SERVICE_UNAVAILABLE,
            "AI service is unavailable. Check GEMINI_API_KEY configuration.",
        );
    };

    let url = request.url.trim().to_string();
    let kind = request.kind.trim().to_string();
    let model_id = resolve_model(request.model.trim());

    if url.is_empty() {
        return failure(
            StatusCode::BAD_REQUEST,
            "Please provide a valid portfolio URL.",
        );
    }

    let fetched = match state.fetcher.fetch(&url).await {
        Ok(fetched) => fetched,
        Err(err) => return failure(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };

    let prompt = build_review_prompt(&url, &fetched.body, &kind, fetched.is_github);

    match gemini.generate(model_id, &prompt).await {
        Ok(analysis) => {
            info!(model_id, url = %url, "Review generated");
            let analysis_html = markdown::render(&analysis);
            (
                StatusCode::OK,
                Json(ReviewOutcome::Success {
                    analysis,
                    model_used: Some(model_id.to_string()),
                    analysis_html: Some(analysis_html),
                }),
            )
        }
        Err(GeminiError::Api { status, body }) => {
            warn!(status, %body, "Gemini API rejected the request");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Gemini API Error: Could not process the request. (Status: {status}). \
                     Please verify the API key and model usage."
                ),
            )
        }
        Err(err) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An unexpected error occurred during AI processing: {err}"),
        ),
    }
}

fn failure(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ReviewOutcome>) {
    (status, Json(ReviewOutcome::failure(message)))
}
