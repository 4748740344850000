use serde::{Deserialize, Serialize};

/// The preset reply for one scripted request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The text the model should reply with.
    pub text: String,
    /// If set, the request will fail in the first `failures` attempts.
    /// `Some(0)` means the request will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetReply {
    /// Creates a `PresetReply` with the specified text.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            failures: None,
        }
    }

    /// Sets failure times before a successful reply. `0` means the
    /// request will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let reply =
            PresetReply::with_text("I have left a message for you.")
                .with_failures(1);

        let serialized = serde_json::to_string(&reply).unwrap();
        let deserialized: PresetReply =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(reply, deserialized);
    }
}
