//! Review backend seam and its HTTP implementation.

use async_trait::async_trait;
use thiserror::Error;

use folio_core::review::model::{ReviewOutcome, ReviewRequest};

/// A request that never produced a decodable outcome.
///
/// Server-reported failures are NOT backend errors - they arrive as
/// [`ReviewOutcome::Failure`] bodies. This type covers the transport
/// layer only: connection failures and undecodable responses.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Something that can run a portfolio review.
#[async_trait]
pub trait ReviewBackend {
    async fn analyze(&self, request: &ReviewRequest) -> Result<ReviewOutcome, BackendError>;
}

/// Backend reached over HTTP at `{base}/analyze`.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ReviewBackend for HttpBackend {
    async fn analyze(&self, request: &ReviewRequest) -> Result<ReviewOutcome, BackendError> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(request)
            .send()
            .await?;

        // The server reports its own failures in the JSON body alongside
        // a 4xx/5xx status, so the body is decoded regardless of status.
        let outcome = response.json::<ReviewOutcome>().await?;

        Ok(outcome)
    }
}
