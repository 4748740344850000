//! Terminal rendering of the spectrum gauge and the transcript.
//!
//! Consumes the structured values produced by the core crate and paints
//! them with ANSI colors; no other coupling to the pipeline.

use diary_friend_core::session::{Speaker, Turn};
use diary_friend_core::spectrum::Spectrum;
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";
const TICK_BLOCK: &str = "██ ";

/// Parses a `#RRGGBB` hex color. Unknown formats fall back to grey.
fn rgb(color: &str) -> (u8, u8, u8) {
    let parse = |range| {
        color
            .get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
    };
    match (parse(1..3), parse(3..5), parse(5..7)) {
        (Some(r), Some(g), Some(b)) if color.starts_with('#') => (r, g, b),
        _ => (158, 158, 158),
    }
}

/// Paints the spectrum as a two-line gauge: a colored band of ticks, and
/// a marker line pointing at the score.
pub fn paint_gauge(spectrum: &Spectrum) -> String {
    let mut band = String::new();
    for stop in &spectrum.color_stops {
        let (r, g, b) = rgb(stop.color);
        band.push_str(&TICK_BLOCK.truecolor(r, g, b).to_string());
    }

    let mut marker_line = String::new();
    for _ in 0..usize::from(spectrum.marker) * TICK_BLOCK.chars().count() {
        marker_line.push(' ');
    }
    marker_line.push_str(&format!("▲ {}", spectrum.marker));

    format!("{band}\n{marker_line}")
}

/// Paints one conversation turn.
pub fn paint_turn(turn: &Turn) -> String {
    match turn.speaker {
        Speaker::Assistant => format!(
            "{}🤖 {}",
            BAR_CHAR.bright_cyan(),
            turn.text.bright_white()
        ),
        Speaker::User => {
            format!("{}🧑 {}", BAR_CHAR.bright_green(), turn.text)
        }
    }
}
