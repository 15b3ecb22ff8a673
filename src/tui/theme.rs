// src/tui/theme.rs - Color scheme and style definitions for the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Brightside palette.
pub struct Theme;

impl Theme {
    pub const PINK: Color = Color::Rgb(255, 102, 178);
    pub const WHITE: Color = Color::Rgb(240, 240, 240);
    pub const GREEN: Color = Color::Rgb(80, 200, 120);
    pub const RED: Color = Color::Rgb(230, 80, 80);
    pub const GRAY: Color = Color::Rgb(120, 120, 140);
    pub const CYAN: Color = Color::Rgb(80, 200, 220);

    /// Dashboard title.
    pub fn header() -> Style {
        Style::default().fg(Theme::PINK).add_modifier(Modifier::BOLD)
    }

    /// Unselected menu option.
    pub fn text() -> Style {
        Style::default().fg(Theme::WHITE)
    }

    /// Instruction line.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::GRAY)
    }

    /// Option under the selection marker.
    pub fn selected() -> Style {
        Style::default().fg(Theme::CYAN).add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Theme::GREEN)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::RED)
    }
}
