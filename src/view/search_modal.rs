//! Search form overlay rendering.
//!
//! A centered modal with one row per field, the sort selector, and the
//! error lines from the last validation verdict: each flagged field gets
//! its message directly under its row, and the two shared cross-field
//! messages render at the bottom.

use ratatui::{
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::search::FieldName;
use crate::state::AppState;
use crate::view::helpers::centered_rect;
use crate::view::styles;

/// Render the search form overlay. No-op unless the form is open.
pub fn render_search_modal(frame: &mut Frame, state: &AppState) {
    if !state.form.visible {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (row, field) in FieldName::ALL.iter().enumerate() {
        let focused = state.form.focused == row;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            styles::focused_style()
        } else {
            styles::label_style()
        };
        let value = state.form.fields.get(*field);
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<16}", field.label()), label_style),
            Span::raw(format!("{value}{cursor}")),
        ]));
        if let Some(message) = state.form.verdict.field_error(*field) {
            lines.push(Line::styled(
                format!("    {message}"),
                styles::error_style(),
            ));
        }
    }

    let sort_focused = state.form.focused == FieldName::ALL.len();
    let marker = if sort_focused { "> " } else { "  " };
    let label_style = if sort_focused {
        styles::focused_style()
    } else {
        styles::label_style()
    };
    lines.push(Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<16}", "Order by"), label_style),
        Span::raw(state.form.fields.sort.to_string()),
        Span::styled("  (space cycles)", styles::dim_style()),
    ]));

    if let Some(message) = state.form.verdict.location_error {
        lines.push(Line::styled(message, styles::error_style()));
    }
    if let Some(message) = state.form.verdict.range_error {
        lines.push(Line::styled(message, styles::error_style()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Enter: search   Tab/Up/Down: move   Esc: close",
        styles::dim_style(),
    ));

    let height = lines.len() as u16 + 2;
    let modal_area = centered_rect(72, height, frame.area());
    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Search")),
        modal_area,
    );
}
