//! Filtered item list shown under the search bar.

use crate::app::state::AppState;
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(" Results ", theme::title()),
        Span::styled(
            format!("{}/{} ", state.result_count(), state.items().len()),
            theme::dim(),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border());

    let lines: Vec<Line<'_>> = if state.result_count() == 0 {
        vec![Line::from(Span::styled(
            format!("  no matches for \"{}\"", state.query()),
            theme::error(),
        ))]
    } else {
        state
            .result_items()
            .enumerate()
            .map(|(index, item)| {
                let style = if index == state.selected() {
                    theme::selected()
                } else {
                    theme::text()
                };
                Line::from(Span::styled(format!("  {item}"), style))
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
