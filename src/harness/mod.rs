//! Visual harness for deterministic rendering snapshots.

use crate::app::state::AppState;
use crate::config::{AppConfig, SearchBarConfig};
use crate::ui;
use crate::widget::SearchBar;
use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Renders the idle, ready, and typing states into plain text.
pub fn render_demo_dump(config: &AppConfig, width: u16, height: u16) -> anyhow::Result<String> {
    let mut out = String::new();

    for (label, state) in demo_states(&config.search_bar, &config.items) {
        let frame = render_state_to_string(&state, width, height)?;
        out.push_str(&format!("=== {label} ===\n{frame}\n"));
    }

    Ok(out)
}

fn demo_states(config: &SearchBarConfig, items: &[String]) -> Vec<(&'static str, AppState)> {
    let idle = AppState::new(SearchBar::from_config(config), items.to_vec());

    let mut ready = AppState::new(SearchBar::from_config(config), items.to_vec());
    ready.search_bar.on_search_tapped();

    let mut typing = AppState::new(SearchBar::from_config(config), items.to_vec());
    typing.search_bar.on_search_tapped();
    for ch in "cat".chars() {
        typing.search_bar.input_mut().push_char(ch);
        typing.search_bar.on_text_changed();
    }
    typing.set_query(typing.search_bar.query().to_owned());

    vec![("IDLE", idle), ("READY", ready), ("TYPING", typing)]
}

fn render_state_to_string(state: &AppState, width: u16, height: u16) -> anyhow::Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).context("failed to create test terminal")?;

    terminal
        .draw(|frame| ui::render(frame, state))
        .context("failed to render frame")?;

    let buffer = terminal.backend().buffer().clone();

    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::render_demo_dump;
    use crate::config;

    #[test]
    fn demo_dump_contains_every_state() {
        let config = config::parse("").expect("defaults should parse");
        let dump = render_demo_dump(&config, 60, 14).expect("render should succeed");

        assert!(dump.contains("=== IDLE ==="));
        assert!(dump.contains("=== READY ==="));
        assert!(dump.contains("=== TYPING ==="));
        assert!(dump.contains("type to search..."));
        assert!(dump.contains("caterpillar"));
    }

    #[test]
    fn typing_frame_hides_unmatched_items() {
        let config = config::parse("").expect("defaults should parse");
        let dump = render_demo_dump(&config, 60, 14).expect("render should succeed");
        let typing = dump
            .split("=== TYPING ===")
            .nth(1)
            .expect("typing frame present");

        assert!(typing.contains("catalog"));
        assert!(!typing.contains("hamster"));
    }
}
