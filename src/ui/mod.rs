//! Top-level UI composition.

use crate::app::state::AppState;
use crate::ui::components::{footer, results, search_bar};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

pub mod components;
mod hints;
pub mod theme;

/// Draws the search bar, its results, and key hints.
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let hints = hints::build(state.search_bar.state());

    let root = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(footer::required_height(frame.area().width, hints)),
    ])
    .split(frame.area());

    search_bar::render(frame, root[0], &state.search_bar);
    results::render(frame, root[1], state);
    footer::render(frame, root[2], hints);
}
