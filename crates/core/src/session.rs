//! Session and transcript types.
//!
//! A [`Session`] is an exclusively owned value that is passed into and
//! returned from every pipeline operation; there is no ambient state.

/// Who authored a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Speaker {
    /// The student writing the diary.
    User,
    /// The diary friend.
    Assistant,
}

/// One turn of the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Who authored this turn.
    pub speaker: Speaker,
    /// The turn's text.
    pub text: String,
}

impl Turn {
    /// Creates a user-authored turn.
    #[inline]
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// Creates an assistant-authored turn.
    #[inline]
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// The ordered list of conversation turns shown to the user.
///
/// Insertion order is render order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Creates a transcript holding a single assistant turn.
    pub(crate) fn seeded_with<S: Into<String>>(feedback: S) -> Self {
        Self {
            turns: vec![Turn::assistant(feedback)],
        }
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Returns the turns in order.
    #[inline]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns the number of turns.
    #[inline]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if there are no turns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// The result of one successful analysis run. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisResult {
    /// The sentiment score, bounded to `0..=10`.
    pub score: u8,
    /// The empathetic feedback text.
    pub feedback: String,
}

/// The stage of the conversation state machine, derived from the
/// transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// No transcript yet.
    Idle,
    /// Exactly one assistant turn, right after a successful analysis.
    Seeded,
    /// One or more follow-up turns have been appended.
    Active,
}

/// The per-user, per-visit container of the current analysis result and
/// transcript state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    analysis: Option<AnalysisResult>,
    transcript: Transcript,
}

impl Session {
    /// Creates an empty session.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded from a fresh analysis result: the
    /// transcript holds exactly one assistant turn with the feedback.
    pub(crate) fn seeded(analysis: AnalysisResult) -> Self {
        let transcript = Transcript::seeded_with(analysis.feedback.clone());
        Self {
            analysis: Some(analysis),
            transcript,
        }
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Returns the current analysis result, if any.
    #[inline]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Returns the transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the current stage of the conversation state machine.
    pub fn stage(&self) -> Stage {
        match self.transcript.turns() {
            [] => Stage::Idle,
            [turn] if turn.speaker == Speaker::Assistant => Stage::Seeded,
            _ => Stage::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_derivation() {
        let mut session = Session::new();
        assert_eq!(session.stage(), Stage::Idle);

        session = Session::seeded(AnalysisResult {
            score: 7,
            feedback: "Nice day!".to_owned(),
        });
        assert_eq!(session.stage(), Stage::Seeded);
        assert_eq!(session.transcript().len(), 1);

        session.transcript_mut().push(Turn::user("hello"));
        assert_eq!(session.stage(), Stage::Active);
    }

    #[test]
    fn test_seeding_replaces_prior_transcript() {
        let mut session = Session::seeded(AnalysisResult {
            score: 2,
            feedback: "first".to_owned(),
        });
        session.transcript_mut().push(Turn::user("hi"));
        session.transcript_mut().push(Turn::assistant("hey"));

        let session = Session::seeded(AnalysisResult {
            score: 9,
            feedback: "second".to_owned(),
        });
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().turns()[0], Turn::assistant("second"));
    }

    #[test]
    fn test_lone_user_turn_is_active() {
        // The documented failure remnant of a failed chat call.
        let mut session = Session::new();
        session.transcript_mut().push(Turn::user("anyone there?"));
        assert_eq!(session.stage(), Stage::Active);
    }
}
