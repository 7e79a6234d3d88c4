//! The submit flow: validate, request, display.

use tracing::error;

use folio_core::markdown;
use folio_core::review::model::{ReviewOutcome, ReviewRequest};
use folio_core::review::validate_portfolio_url;

use crate::backend::ReviewBackend;
use crate::surface::ReviewSurface;

/// Shown for transport failures. The underlying detail is logged, never
/// displayed.
pub const NETWORK_ERROR_MESSAGE: &str =
    "A network error occurred. Please check your connection and try again.";

/// Runs review submissions against a backend.
///
/// Each call is self-contained: previous results and errors are cleared
/// up front, so rapid resubmission never layers stale content under new
/// output. There is no retry and no cancellation; when two submissions
/// overlap, the last one to resolve owns the surface.
pub struct ReviewClient<B> {
    backend: B,
}

impl<B: ReviewBackend> ReviewClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Submit one review and drive `surface` through the outcome.
    ///
    /// Validation failures stop before the backend is touched. Backend
    /// outcomes map one-to-one: a reported error is shown verbatim, an
    /// analysis is rendered to HTML and revealed.
    pub async fn submit(
        &self,
        surface: &mut dyn ReviewSurface,
        url: &str,
        kind: &str,
        model: &str,
    ) {
        surface.hide_results();
        surface.clear_output();
        surface.hide_error();

        let url = url.trim();
        if let Err(reason) = validate_portfolio_url(url) {
            surface.show_error(&reason.to_string());
            return;
        }

        surface.show_loader();

        let request = ReviewRequest {
            url: url.to_string(),
            kind: kind.to_string(),
            model: model.to_string(),
        };

        match self.backend.analyze(&request).await {
            Ok(outcome) => {
                surface.hide_loader();
                match outcome {
                    ReviewOutcome::Failure { error } => surface.show_error(&error),
                    ReviewOutcome::Success { analysis, .. } => {
                        let html = markdown::render(&analysis);
                        surface.show_results(&html);
                    }
                }
            }
            Err(err) => {
                error!("analyze request failed: {err}");
                surface.hide_loader();
                surface.show_error(NETWORK_ERROR_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use async_trait::async_trait;

    /// Surface double recording visibility state and the call order.
    #[derive(Default)]
    struct MockSurface {
        events: Vec<&'static str>,
        loader_visible: bool,
        results_visible: bool,
        output_html: String,
        error_message: Option<String>,
    }

    impl ReviewSurface for MockSurface {
        fn hide_results(&mut self) {
            self.events.push("hide_results");
            self.results_visible = false;
        }

        fn clear_output(&mut self) {
            self.events.push("clear_output");
            self.output_html.clear();
        }

        fn hide_error(&mut self) {
            self.events.push("hide_error");
            self.error_message = None;
        }

        fn show_loader(&mut self) {
            self.events.push("show_loader");
            self.loader_visible = true;
        }

        fn hide_loader(&mut self) {
            self.events.push("hide_loader");
            self.loader_visible = false;
        }

        fn show_error(&mut self, message: &str) {
            self.events.push("show_error");
            self.error_message = Some(message.to_string());
        }

        fn show_results(&mut self, html: &str) {
            self.events.push("show_results");
            self.output_html = html.to_string();
            self.results_visible = true;
        }
    }

    enum MockBackend {
        Respond(ReviewOutcome),
        FailTransport,
    }

    #[async_trait]
    impl ReviewBackend for MockBackend {
        async fn analyze(
            &self,
            _request: &ReviewRequest,
        ) -> Result<ReviewOutcome, BackendError> {
            match self {
                Self::Respond(outcome) => Ok(outcome.clone()),
                // An unparseable URL makes reqwest fail before any
                // network activity, which is the cheapest way to obtain
                // a real transport error in tests.
                Self::FailTransport => Err(BackendError::Transport(
                    reqwest::Client::new()
                        .post("no-scheme")
                        .send()
                        .await
                        .unwrap_err(),
                )),
            }
        }
    }

    async fn run(backend: MockBackend, url: &str) -> MockSurface {
        let client = ReviewClient::new(backend);
        let mut surface = MockSurface::default();
        client.submit(&mut surface, url, "General", "flash").await;
        surface
    }

    #[tokio::test]
    async fn empty_url_shows_the_empty_message() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::failure("should not be reached")),
            "",
        )
        .await;
        assert_eq!(
            surface.error_message.as_deref(),
            Some("Please enter a valid URL.")
        );
        assert!(!surface.loader_visible, "loader must not start on validation failure");
        assert!(!surface.results_visible);
    }

    #[tokio::test]
    async fn whitespace_url_counts_as_empty() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::failure("should not be reached")),
            "   ",
        )
        .await;
        assert_eq!(
            surface.error_message.as_deref(),
            Some("Please enter a valid URL.")
        );
    }

    #[tokio::test]
    async fn malformed_url_shows_the_format_message() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::failure("should not be reached")),
            "not a url",
        )
        .await;
        assert_eq!(
            surface.error_message.as_deref(),
            Some("Please enter a properly formatted URL (e.g., https://example.com)")
        );
        assert!(!surface.events.contains(&"show_loader"));
    }

    #[tokio::test]
    async fn server_error_is_shown_verbatim_and_results_stay_hidden() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::failure("bad input")),
            "https://example.com",
        )
        .await;
        assert_eq!(surface.error_message.as_deref(), Some("bad input"));
        assert!(!surface.results_visible);
        assert!(!surface.loader_visible);
    }

    #[tokio::test]
    async fn analysis_is_rendered_and_revealed() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::Success {
                analysis: "# Hi".to_string(),
                model_used: None,
                analysis_html: None,
            }),
            "https://example.com",
        )
        .await;
        assert!(surface.results_visible);
        assert_eq!(surface.output_html, "<h1>Hi</h1>");
        assert!(surface.error_message.is_none());
        assert!(!surface.loader_visible);
    }

    #[tokio::test]
    async fn transport_failure_shows_the_generic_message() {
        let surface = run(MockBackend::FailTransport, "https://example.com").await;
        assert_eq!(surface.error_message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
        assert!(!surface.results_visible);
        assert!(!surface.loader_visible);
    }

    #[tokio::test]
    async fn every_submission_resets_the_surface_first() {
        let client = ReviewClient::new(MockBackend::Respond(ReviewOutcome::Success {
            analysis: "fresh".to_string(),
            model_used: None,
            analysis_html: None,
        }));

        let mut surface = MockSurface {
            results_visible: true,
            output_html: "<p>stale</p>".to_string(),
            error_message: Some("stale error".to_string()),
            ..MockSurface::default()
        };

        client
            .submit(&mut surface, "https://example.com", "General", "flash")
            .await;

        assert_eq!(
            &surface.events[..3],
            &["hide_results", "clear_output", "hide_error"]
        );
        assert_eq!(surface.output_html, "<p>fresh</p>");
    }

    #[tokio::test]
    async fn loader_toggles_around_the_request() {
        let surface = run(
            MockBackend::Respond(ReviewOutcome::Success {
                analysis: "text".to_string(),
                model_used: None,
                analysis_html: None,
            }),
            "https://example.com",
        )
        .await;
        assert_eq!(
            surface.events,
            vec![
                "hide_results",
                "clear_output",
                "hide_error",
                "show_loader",
                "hide_loader",
                "show_results"
            ]
        );
    }
}
