use diary_friend_model::{ErrorKind, ModelProviderError};
use thiserror::Error;

/// A fatal configuration error, detected before any model call is made.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every credential source declined to supply an API key.
    #[error(
        "no API key found (searched: {}); pass one with --api-key, set the \
         OPENAI_API_KEY environment variable, or create a secrets file \
         containing {{\"api_key\": \"sk-...\"}}",
        searched.join(", ")
    )]
    MissingCredential {
        /// Names of the credential sources that were tried, in order.
        searched: Vec<String>,
    },
}

/// The scoring reply contained no parseable score.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no score found in the model reply")]
pub struct ExtractionError;

/// A failure reported by the external model service.
///
/// Aborts the current analysis or chat turn only; it never invalidates
/// previously produced session state.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    kind: ErrorKind,
}

impl ServiceError {
    /// Returns the coarse kind reported by the provider.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the provider's error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Box<dyn ModelProviderError>> for ServiceError {
    fn from(err: Box<dyn ModelProviderError>) -> Self {
        Self {
            message: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// The ways an analysis run can fail.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The scoring reply had no digit run to parse.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    /// One of the two generation calls failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
