//! Emotion banding: mapping a score to a discrete category and a display
//! color.

/// A discrete emotion band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emotion {
    /// Scores 0 through 3.
    Negative,
    /// Scores 4 through 7.
    Neutral,
    /// Scores 8 through 10.
    Positive,
}

impl Emotion {
    /// Returns the display color for this band, as a `#RRGGBB` hex string.
    #[inline]
    pub fn color(self) -> &'static str {
        match self {
            Emotion::Negative => "#F44336",
            Emotion::Neutral => "#FFC107",
            Emotion::Positive => "#4CAF50",
        }
    }

    /// Returns a short lowercase label for this band.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
            Emotion::Positive => "positive",
        }
    }
}

/// Classifies a score into its emotion band.
///
/// Total and deterministic for every `u8`; scores beyond the advertised
/// range fall into the `Positive` band.
#[inline]
pub fn classify(score: u8) -> Emotion {
    match score {
        0..=3 => Emotion::Negative,
        4..=7 => Emotion::Neutral,
        _ => Emotion::Positive,
    }
}
