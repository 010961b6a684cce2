//! Tab chip palette and semantic styles.

use ratatui::style::{Color, Modifier, Style};

// ── Chip Palette ──────────────────────────────────────────────────────

pub const CHIP_FG: Color = Color::Rgb(240, 240, 240); // #f0f0f0
pub const CHIP_BG: Color = Color::Rgb(38, 38, 38); // #262626

// ── Extended Palette ──────────────────────────────────────────────────

pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4

// ── Semantic Styles ───────────────────────────────────────────────────

/// Label text of a tab, before any dimming.
pub fn tab_chip() -> Style {
    Style::default().fg(CHIP_FG).bg(CHIP_BG)
}

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Plain body text.
pub fn body_text() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}
