//! Review request and response payloads.

use serde::{Deserialize, Serialize};

/// Portfolio kind used when the request omits the `type` field.
pub const DEFAULT_KIND: &str = "General";

/// Model alias used when the request omits the `model` field.
pub const DEFAULT_MODEL_ALIAS: &str = "flash";

/// Body of `POST /analyze`.
///
/// `kind` is free-form text on the wire (`"type"`); the fixed option list
/// is a property of the review form, not the protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub url: String,

    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    #[serde(default = "default_model_alias")]
    pub model: String,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

fn default_model_alias() -> String {
    DEFAULT_MODEL_ALIAS.to_string()
}

/// Body of the `/analyze` response.
///
/// Success and failure are mutually exclusive; the failure variant is
/// listed first so a body carrying `error` wins even if other fields are
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewOutcome {
    Failure {
        error: String,
    },
    Success {
        /// Raw Markdown review text from the model.
        analysis: String,

        /// Concrete model id the backend resolved the alias to.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model_used: Option<String>,

        /// Server-side rendering of `analysis`, so thin clients need no
        /// Markdown logic of their own.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        analysis_html: Option<String>,
    },
}

impl ReviewOutcome {
    /// Build a failure outcome from any displayable error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error: message.into(),
        }
    }
}
