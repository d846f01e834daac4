//! Souk Dusk palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const BRASS: Color = Color::Rgb(222, 170, 84); // #deaa54
pub const MINT: Color = Color::Rgb(129, 224, 185); // #81e0b9
pub const ROSE: Color = Color::Rgb(235, 129, 152); // #eb8198
pub const SAFFRON: Color = Color::Rgb(244, 211, 126); // #f4d37e
pub const OK_GREEN: Color = Color::Rgb(114, 227, 133); // #72e385
pub const ALERT_RED: Color = Color::Rgb(240, 98, 89); // #f06259

// ── Extended Palette ──────────────────────────────────────────────────

pub const PARCHMENT: Color = Color::Rgb(212, 205, 190); // #d4cdbe
pub const BORDER_GRAY: Color = Color::Rgb(110, 108, 122); // #6e6c7a
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 40, 36); // #2c2824

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(BRASS).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(BRASS)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Border for the detail overlay, set off from the grid behind it.
pub fn overlay_border() -> Style {
    Style::default().fg(ROSE)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(MINT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(PARCHMENT)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default()
        .fg(SAFFRON)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the brand filter bar.
pub fn tab_active() -> Style {
    Style::default().fg(BRASS).add_modifier(Modifier::BOLD)
}

/// Inactive tab in the brand filter bar.
pub fn tab_inactive() -> Style {
    Style::default().fg(PARCHMENT)
}

/// Price text.
pub fn price_style() -> Style {
    Style::default().fg(SAFFRON).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(MINT).add_modifier(Modifier::BOLD)
}
