//! The presentation adapter: turning a score into a renderable gauge
//! description.

use crate::emotion;
use crate::score::MAX_SCORE;

/// One colored tick on the spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorStop {
    /// The tick this stop colors.
    pub tick: u8,
    /// The stop's color, as a `#RRGGBB` hex string.
    pub color: &'static str,
}

/// A renderable description of the score gauge: the ticks `0..=10`, one
/// color stop per tick, and the marker position.
///
/// Pure data; the rendering surface decides how to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spectrum {
    /// The tick values, in order.
    pub ticks: Vec<u8>,
    /// One color stop per tick, banded by emotion.
    pub color_stops: Vec<ColorStop>,
    /// The tick the marker points at. Equals the score.
    pub marker: u8,
}

impl Spectrum {
    /// Builds the spectrum description for a score.
    pub fn for_score(score: u8) -> Self {
        let marker = score.min(MAX_SCORE);
        let ticks: Vec<u8> = (0..=MAX_SCORE).collect();
        let color_stops = ticks
            .iter()
            .map(|&tick| ColorStop {
                tick,
                color: emotion::classify(tick).color(),
            })
            .collect();
        Self {
            ticks,
            color_stops,
            marker,
        }
    }
}
