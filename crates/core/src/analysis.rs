//! The diary-analysis pipeline and the chat continuation.


use diary_friend_model::{ModelMessage, ModelProvider, ModelRequest};

use crate::error::{AnalyzeError, ServiceError};
use crate::model_client::ModelClient;
use crate::score::extract_score;
use crate::session::{AnalysisResult, Session, Speaker, Turn};

/// The two instruction templates used by the pipeline.
///
/// Both are opaque to the pipeline and can be swapped without affecting
/// its contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prompts {
    /// The sentiment-scoring instruction.
    pub scoring: String,
    /// The empathetic-feedback instruction, also used as the persona for
    /// follow-up chat turns.
    pub feedback: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            scoring: "You rate the overall mood of a diary entry. Reply \
                      with a single integer score from 0 (very negative) \
                      to 10 (very positive)."
                .to_owned(),
            feedback: "You are a warm social-emotional support companion \
                       for primary and middle school students. Chat in a \
                       friendly, upbeat tone, use plenty of emoji, \
                       acknowledge the writer's feelings, and pass on \
                       positive energy."
                .to_owned(),
        }
    }
}

/// The outcome of submitting a chat message.
///
/// The updated session is always returned; when the generation call for
/// the message failed, the appended user turn stays without a matching
/// assistant turn and `error` carries the failure.
#[derive(Debug)]
pub struct SubmitOutcome {
    /// The updated session.
    pub session: Session,
    /// The service failure for this turn, if any.
    pub error: Option<ServiceError>,
}

/// The diary-analysis pipeline.
///
/// Holds a model client and the instruction templates. Every operation
/// takes the current [`Session`] by value where it mutates it, and
/// returns the updated one; the analyzer itself carries no session state.
pub struct Analyzer {
    model_client: ModelClient,
    prompts: Prompts,
}

impl Analyzer {
    /// Creates an analyzer backed by the given model provider, with the
    /// default prompts.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        Self {
            model_client: ModelClient::new(provider),
            prompts: Prompts::default(),
        }
    }

    /// Replaces the instruction templates.
    #[inline]
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Runs the two-step analysis over a diary entry.
    ///
    /// Issues the scoring request, extracts the score, then issues the
    /// feedback request, and assembles a fresh session whose transcript
    /// is seeded with one assistant turn holding the feedback.
    ///
    /// All-or-nothing: on any failure the caller's stored session is the
    /// one to keep; no partial result is produced.
    pub async fn analyze(&self, diary: &str) -> Result<Session, AnalyzeError> {
        let scoring_req = ModelRequest {
            messages: vec![
                ModelMessage::System(self.prompts.scoring.clone()),
                ModelMessage::User(format!(
                    "Rate this diary entry:\n\n{diary}"
                )),
            ],
        };
        let reply = self
            .model_client
            .send_request(scoring_req)
            .await
            .map_err(ServiceError::from)?;
        let score = extract_score(&reply.text)?;
        debug!("extracted score {score}");

        let feedback_req = ModelRequest {
            messages: vec![
                ModelMessage::System(self.prompts.feedback.clone()),
                ModelMessage::User(format!(
                    "Please give feedback on this diary entry:\n\n{diary}"
                )),
            ],
        };
        let reply = self
            .model_client
            .send_request(feedback_req)
            .await
            .map_err(ServiceError::from)?;

        Ok(Session::seeded(AnalysisResult {
            score,
            feedback: reply.text,
        }))
    }

    /// Submits a follow-up chat message.
    ///
    /// An empty (or whitespace-only) message is a no-op. Otherwise the
    /// user turn is appended immediately, one generation request carrying
    /// the persona prompt plus the full transcript is issued, and the
    /// assistant turn is appended when it returns.
    pub async fn submit(&self, session: Session, message: &str) -> SubmitOutcome {
        let message = message.trim();
        if message.is_empty() {
            return SubmitOutcome {
                session,
                error: None,
            };
        }

        let mut session = session;
        session.transcript_mut().push(Turn::user(message));

        let req = self.build_chat_request(&session);
        match self.model_client.send_request(req).await {
            Ok(reply) => {
                session.transcript_mut().push(Turn::assistant(reply.text));
                SubmitOutcome {
                    session,
                    error: None,
                }
            }
            Err(err) => SubmitOutcome {
                session,
                error: Some(err.into()),
            },
        }
    }

    fn build_chat_request(&self, session: &Session) -> ModelRequest {
        let mut messages =
            vec![ModelMessage::System(self.prompts.feedback.clone())];
        messages.extend(session.transcript().turns().iter().map(|turn| {
            match turn.speaker {
                Speaker::User => ModelMessage::User(turn.text.clone()),
                Speaker::Assistant => {
                    ModelMessage::Assistant(turn.text.clone())
                }
            }
        }));
        ModelRequest { messages }
    }
}
