//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use diary_friend_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelReply, ModelRequest,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

struct ScriptStep {
    reply: PresetReply,
    attempts: u64,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the reply script, which is
/// how the model should respond to each request. Steps are consumed in
/// request order; a step with failure injection stays at the front of the
/// script until its failure budget is exhausted. If there are no enough
/// steps in the script, an error will be returned.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<VecDeque<ScriptStep>>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_reply_step(&mut self, preset: PresetReply) {
        self.script.lock().unwrap().push_back(ScriptStep {
            reply: preset,
            attempts: 0,
        });
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns the number of steps that have not completed yet.
    #[inline]
    pub fn remaining_steps(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = Error;

    fn send_request(
        &self,
        _req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelReply, Self::Error>> + Send + 'static
    {
        // The outcome is decided at call time, so that concurrent holders
        // of a cloned provider observe a consistent script.
        let outcome = {
            let mut script = self.script.lock().unwrap();
            match script.front_mut() {
                None => Err(Error {
                    message: "no enough steps",
                    kind: ErrorKind::RateLimitExceeded,
                }),
                Some(step) => match step.reply.failures {
                    Some(0) => Err(Error {
                        message: "injected failure",
                        kind: ErrorKind::Other,
                    }),
                    Some(n) if step.attempts < n => {
                        step.attempts += 1;
                        Err(Error {
                            message: "injected failure",
                            kind: ErrorKind::Other,
                        })
                    }
                    _ => {
                        let text = step.reply.text.clone();
                        script.pop_front();
                        Ok(ModelReply::new(text))
                    }
                },
            }
        };

        let delay = self.delay;
        async move {
            sleep(delay.unwrap_or(Duration::from_millis(1))).await;
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use diary_friend_model::ModelMessage;

    use super::*;

    fn request() -> ModelRequest {
        ModelRequest {
            messages: vec![ModelMessage::User("Hi".to_owned())],
        }
    }

    #[tokio::test]
    async fn test_send_request() {
        let mut provider = TestModelProvider::default();
        provider.add_reply_step(PresetReply::with_text("Hello, world!"));
        provider.add_reply_step(PresetReply::with_text("Bye!"));

        let reply = provider.send_request(&request()).await.unwrap();
        assert_eq!(reply.text, "Hello, world!");
        let reply = provider.send_request(&request()).await.unwrap();
        assert_eq!(reply.text, "Bye!");
        assert_eq!(provider.remaining_steps(), 0);

        let err = provider.send_request(&request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let mut provider = TestModelProvider::default();
        provider
            .add_reply_step(PresetReply::with_text("Third time").with_failures(2));

        for _ in 0..2 {
            let err = provider.send_request(&request()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Other);
        }
        let reply = provider.send_request(&request()).await.unwrap();
        assert_eq!(reply.text, "Third time");
    }

    #[tokio::test]
    async fn test_infinite_failure() {
        let mut provider = TestModelProvider::default();
        provider
            .add_reply_step(PresetReply::with_text("never").with_failures(0));

        for _ in 0..3 {
            assert!(provider.send_request(&request()).await.is_err());
        }
        assert_eq!(provider.remaining_steps(), 1);
    }
}
