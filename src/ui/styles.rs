use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::assets::ImageLoadState;

/// Accent color used for headings, the active tab and loaded tiles.
pub const ACCENT: Color = Color::Indexed(208);

/// Color for tiles whose image could not be shown.
pub const ERROR: Color = Color::Red;

/// Bold accent heading, e.g. the catalog title above the gallery.
pub fn heading(text: impl Into<String>) -> Text<'static> {
    Text::from(text.into().bold().fg(ACCENT))
}

/// Dimmed line for tile details and hints.
pub fn hint_line(text: impl Into<String>) -> Line<'static> {
    Line::from(text.into().dim())
}

pub fn hint_span(text: impl Into<String>) -> Span<'static> {
    Span::from(text.into()).dim()
}

pub fn active_tab_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style of a tile's first line for the given load state.
pub fn tile_status_style(state: &ImageLoadState) -> Style {
    match state {
        ImageLoadState::Loading => Style::default().add_modifier(Modifier::DIM),
        ImageLoadState::Loaded(_) => Style::default().fg(ACCENT),
        ImageLoadState::NotFound | ImageLoadState::Failed(_) => Style::default().fg(ERROR),
    }
}
