//! Display-cell measurement.

use ratatui::text::Span;

/// Number of terminal columns `text` occupies when drawn.
///
/// Wide glyphs (CJK, most emoji) count as two cells and combining marks as
/// zero, matching what ratatui writes into a `Buffer`.
pub fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}
