//! Opacity transform for de-emphasised content.
//!
//! Terminals have no alpha channel, so "opacity" is approximated by pulling
//! the foreground colour toward the background colour of the same span.

use ratatui::style::{Color, Modifier};
use ratatui::text::Span;

/// Fade `span` to `factor` opacity over its own background.
///
/// `1.0` leaves the span untouched, `0.0` makes the text colour identical to
/// its background. When either colour is not RGB there is nothing to blend,
/// so the span gets the `DIM` modifier instead. A NaN or infinite factor
/// leaves the span as is.
pub fn dim(span: Span<'_>, factor: f32) -> Span<'_> {
    if !factor.is_finite() {
        return span;
    }
    let factor = factor.clamp(0.0, 1.0);
    let style = span.style;

    match (style.fg, style.bg) {
        (Some(fg @ Color::Rgb(..)), Some(bg @ Color::Rgb(..))) => {
            let faded = blend(bg, fg, factor);
            span.style(style.fg(faded))
        }
        _ if factor < 1.0 => span.style(style.add_modifier(Modifier::DIM)),
        _ => span,
    }
}

/// Linear interpolation from `from` (at `0.0`) to `to` (at `1.0`).
///
/// Non-RGB inputs are returned as `to` unchanged.
pub fn blend(from: Color, to: Color, factor: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (from, to) else {
        return to;
    };
    let factor = factor.clamp(0.0, 1.0);
    Color::Rgb(
        mix(r1, r2, factor),
        mix(g1, g2, factor),
        mix(b1, b2, factor),
    )
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn mix(a: u8, b: u8, factor: f32) -> u8 {
    let (a, b) = (f32::from(a), f32::from(b));
    // factor is clamped, so the result stays within 0..=255
    (a + (b - a) * factor).round() as u8
}
