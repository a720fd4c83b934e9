//! Tab bar widget.
//!
//! Displays the four content tabs using ratatui's Tabs widget. The active
//! tab comes from `AppState::active_tab`; rendering the bar never touches
//! the tab content cache.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::state::Tab;

/// Render the tab bar.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("quakewatch"))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(active.index());

    frame.render_widget(tabs, area);
}
