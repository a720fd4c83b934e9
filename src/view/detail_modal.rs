//! Detail overlay rendering: one event's fixed display slots.

use ratatui::{
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::view::helpers::centered_rect;
use crate::view::styles;

/// Render the detail overlay. No-op unless a detail view is open.
pub fn render_detail_modal(frame: &mut Frame, state: &AppState) {
    let Some(detail) = &state.detail else {
        return;
    };

    let unit = detail.depth_unit;
    let rows: [(&str, String); 7] = [
        ("Magnitude", detail.magnitude.clone()),
        ("Depth", format!("{} {unit}", detail.depth)),
        ("Felt reports", detail.felt_report.clone()),
        ("Latitude", detail.latitude.clone()),
        ("Longitude", detail.longitude.clone()),
        ("Place", detail.place.clone()),
        ("Tsunami", detail.tsunami.clone()),
    ];

    let mut lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), styles::label_style()),
                Span::raw(value),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Esc: close", styles::dim_style()));

    let modal_area = centered_rect(56, lines.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Event detail")),
        modal_area,
    );
}
