//! Content area rendering: the Home card list, placeholder tabs, the
//! loader, and the empty-result / failure messages.
//!
//! Everything drawn here comes from the tab cache and the fetch phase;
//! rendering never regenerates cached content and never touches the
//! event store beyond reading it.

use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, EventCard, FetchPhase, Tab, TabContent, NO_EVENTS_MESSAGE};
use crate::view::styles;

/// Loader animation frames, advanced once per UI tick.
const LOADER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the active tab's content into `area`.
///
/// The loader and the terminal fetch outcomes (empty result, failure)
/// take over the whole content area regardless of which tab is active;
/// a search can be submitted from any tab. Takes `state` mutably only
/// to persist the card list's scroll offset across frames.
pub fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState, tick: usize) {
    if state.is_loading() {
        render_loader(frame, area, tick);
        return;
    }
    match &state.phase {
        FetchPhase::EmptyResult => {
            render_empty_result(frame, area);
            return;
        }
        FetchPhase::Failed { message } => {
            render_failure(frame, area, message);
            return;
        }
        _ => {}
    }

    match state.active_tab {
        Tab::Home => render_card_list(frame, area, state),
        other => render_placeholder(frame, area, state, other),
    }
}

fn render_loader(frame: &mut Frame, area: Rect, tick: usize) {
    let frame_char = LOADER_FRAMES[tick % LOADER_FRAMES.len()];
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(frame_char, styles::focused_style()),
        Span::raw(" Loading events..."),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .centered();
    frame.render_widget(paragraph, area);
}

fn render_empty_result(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(NO_EVENTS_MESSAGE)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str) {
    let text = Text::from(vec![
        Line::styled(message.to_string(), styles::error_style()),
        Line::raw(""),
        Line::styled("Press r to retry.", styles::dim_style()),
    ]);
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Error"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_card_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let cards = state.tabs.home_cards();
    if cards.is_empty() {
        let paragraph = Paragraph::new("No events loaded. Press / to search.")
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = cards.iter().map(card_item).collect();
    let count = cards.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Events ({count})")),
        )
        .highlight_style(styles::selected_style());

    let mut list_state = ListState::default()
        .with_offset(state.scroll_offset)
        .with_selected(Some(state.selected_card));
    frame.render_stateful_widget(list, area, &mut list_state);
    // Persist the offset the widget settled on so selection stays in
    // view on the next frame.
    state.scroll_offset = list_state.offset();
}

fn card_item(card: &EventCard) -> ListItem<'_> {
    let magnitude = card.magnitude.parse::<f64>().ok();
    let magnitude_text = if card.magnitude.is_empty() {
        "  ?".to_string()
    } else {
        format!("{:>4}", card.magnitude)
    };
    ListItem::new(Text::from(vec![
        Line::from(vec![
            Span::styled(magnitude_text, styles::magnitude_style(magnitude)),
            Span::raw("  "),
            Span::raw(card.place.as_str()),
        ]),
        Line::styled(format!("      {}", card.when), styles::dim_style()),
        Line::raw(""),
    ]))
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, tab: Tab) {
    let text = match state.tabs.get(tab) {
        TabContent::Placeholder(text) => *text,
        TabContent::Cards(_) => "",
    };
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(tab.title()))
        .centered();
    frame.render_widget(paragraph, area);
}
