//! Styling for event cards and overlays.

use ratatui::style::{Color, Modifier, Style};

/// Style for a magnitude value, scaled by severity.
pub fn magnitude_style(magnitude: Option<f64>) -> Style {
    let color = match magnitude {
        Some(m) if m >= 7.0 => Color::Red,
        Some(m) if m >= 5.5 => Color::LightRed,
        Some(m) if m >= 4.0 => Color::Yellow,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for the selected card row.
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Style for error lines (validation messages, fetch failures).
pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for dimmed secondary text (dates, hints).
pub fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for form field labels.
pub fn label_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the focused form row.
pub fn focused_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
