//! Footer component used for keybinding hints.

use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// A single `[key] description` hint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Hint {
    pub key: &'static str,
    pub desc: &'static str,
}

impl Hint {
    fn width(self) -> usize {
        self.key.chars().count() + 1 + self.desc.chars().count()
    }
}

/// Returns the footer height required to render all hints for the given terminal width.
pub fn required_height(screen_width: u16, hints: &[Hint]) -> u16 {
    let width = usize::from(screen_width.max(1));
    u16::try_from(wrap_hints(hints, width).len().max(1)).unwrap_or(u16::MAX)
}

/// Renders keybinding hints in a plain bottom bar.
pub fn render(frame: &mut Frame<'_>, area: Rect, hints: &[Hint]) {
    let width = usize::from(area.width.max(1));
    let lines: Vec<Line<'static>> = wrap_hints(hints, width)
        .iter()
        .map(|line| styled_hint_line(line))
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn wrap_hints(hints: &[Hint], width: usize) -> Vec<Vec<Hint>> {
    let mut lines = Vec::new();
    let mut current = Vec::<Hint>::new();
    let mut current_width = 0usize;

    for hint in hints {
        let separator_width = if current.is_empty() { 0 } else { 2 };
        let projected_width = current_width + separator_width + hint.width();

        if projected_width <= width || current.is_empty() {
            current.push(*hint);
            current_width = projected_width;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        current.push(*hint);
        current_width = hint.width();
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn styled_hint_line(hints: &[Hint]) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (index, hint) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", theme::dim()));
        }
        spans.push(Span::styled(hint.key, theme::info()));
        spans.push(Span::styled(" ", theme::dim()));
        spans.push(Span::styled(hint.desc, theme::dim()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::{Hint, required_height, wrap_hints};

    const HINTS: [Hint; 3] = [
        Hint {
            key: "[/]",
            desc: "search",
        },
        Hint {
            key: "[q]",
            desc: "quit",
        },
        Hint {
            key: "[C-u]",
            desc: "clear",
        },
    ];

    #[test]
    fn wide_terminal_keeps_one_line() {
        assert_eq!(required_height(80, &HINTS), 1);
    }

    #[test]
    fn narrow_terminal_wraps_between_hints() {
        let lines = wrap_hints(&HINTS, 12);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], vec![HINTS[1]]);
    }
}
