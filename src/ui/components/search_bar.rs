//! Renders a [`SearchBar`] from the visibility of its children.

use crate::elements::{Element, TextInput, TextLabel};
use crate::ui::theme;
use crate::widget::SearchBar;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LEFT_PADDING: &str = "  ";

pub fn render(frame: &mut Frame<'_>, area: Rect, bar: &SearchBar) {
    let children = bar.children();
    let input = &children.input;
    let editing = input.is_visible();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if input.is_focused() {
            theme::info()
        } else {
            theme::border()
        });
    let inner = block.inner(area);

    let mut left = vec![Span::raw(LEFT_PADDING)];
    if children.title.is_visible() {
        left.push(Span::styled(children.title.text().to_owned(), theme::title()));
    }
    if editing {
        if input.text().is_empty() {
            left.push(Span::styled(input.placeholder().to_owned(), theme::dim()));
        } else {
            left.push(Span::styled(input.text().to_owned(), theme::text()));
        }
        if let Some(icon) = input.trailing_icon() {
            left.push(Span::styled(format!(" {}", icon.glyph()), theme::icon()));
        }
    }

    let control = if children.search.is_visible() {
        Some(children.search.caption())
    } else if children.clear.is_visible() {
        Some(children.clear.caption())
    } else {
        None
    };

    let line = line_with_right_control(left, control, usize::from(inner.width));
    frame.render_widget(Paragraph::new(line).block(block), area);

    if editing && input.is_focused() && bar.keyboard().is_shown() {
        let offset = LEFT_PADDING.chars().count() + input.text().chars().count();
        let x = inner
            .x
            .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn line_with_right_control(
    left: Vec<Span<'static>>,
    control: Option<&str>,
    inner_width: usize,
) -> Line<'static> {
    let Some(caption) = control else {
        return Line::from(left);
    };

    let control_text = format!("[{caption}]");
    let left_len: usize = left.iter().map(|span| span.content.chars().count()).sum();
    let control_len = control_text.chars().count();

    let mut spans = left;
    let gap = inner_width.saturating_sub(left_len + control_len).max(1);
    spans.push(Span::styled(" ".repeat(gap), Style::default()));
    spans.push(Span::styled(control_text, theme::info()));
    Line::from(spans)
}
