use serde::{Deserialize, Serialize};

/// A complete reply from the model provider.
///
/// Providers are expected to deliver the whole generated text at once;
/// there is no streaming surface in this protocol. The text should be
/// trimmed of surrounding whitespace by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelReply {
    /// The generated text.
    pub text: String,
}

impl ModelReply {
    /// Creates a reply with the given text, trimming surrounding
    /// whitespace.
    #[inline]
    pub fn new<S: AsRef<str>>(text: S) -> Self {
        Self {
            text: text.as_ref().trim().to_owned(),
        }
    }
}
