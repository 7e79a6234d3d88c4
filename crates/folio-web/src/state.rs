//! Application state.

use std::sync::Arc;

use folio_gemini::GeminiClient;

use crate::fetcher::ContentFetcher;

/// Application state shared across handlers.
///
/// `gemini` is `None` when no API key is configured; the analyze route
/// then answers 503 instead of refusing to start, so the page itself
/// stays reachable.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Option<Arc<GeminiClient>>,
    pub fetcher: Arc<ContentFetcher>,
}

impl AppState {
    pub fn new(gemini: Option<GeminiClient>) -> Self {
        Self {
            gemini: gemini.map(Arc::new),
            fetcher: Arc::new(ContentFetcher::new()),
        }
    }
}
