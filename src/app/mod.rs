//! Application runtime, event loop, and keyboard handling.

pub mod editor;
pub mod events;
pub mod state;

use crate::app::events::{AppMessage, spawn_input_reader};
use crate::app::state::AppState;
use crate::elements::TextInput;
use crate::ui;
use crate::widget::{EditorAction, SearchBar, SearchState};
use anyhow::{Context, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{Stdout, stdout};
use std::panic::{self, PanicHookInfo};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Runtime configuration resolved from the config file and CLI flags.
#[derive(Debug)]
pub struct AppConfig {
    pub search_bar: SearchBar,
    pub items: Vec<String>,
}

/// Runs the interactive TUI application.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    let mut search_bar = config.search_bar;
    connect_listener(&mut search_bar, tx.clone());
    let mut state = AppState::new(search_bar, config.items);

    let mut terminal = setup_terminal()?;
    spawn_input_reader(tx);

    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(log_panic));

    let result = run_event_loop(&mut terminal, &mut state, &mut rx).await;

    panic::set_hook(previous_hook);
    rx.close();
    restore_terminal(&mut terminal)?;
    result
}

/// Forwards every query edit to the event loop.
fn connect_listener(search_bar: &mut SearchBar, tx: UnboundedSender<AppMessage>) {
    search_bar.set_on_text_changed(move |query| {
        tx.send(AppMessage::QueryChanged(query.to_owned()))
            .map_err(|_| anyhow!("event loop is no longer receiving queries"))
    });
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, state))?;

        if state.should_quit {
            break;
        }

        let Some(message) = rx.recv().await else {
            break;
        };
        process_message(state, message)?;

        while let Ok(message) = rx.try_recv() {
            process_message(state, message)?;
        }
    }

    Ok(())
}

fn process_message(state: &mut AppState, message: AppMessage) -> anyhow::Result<()> {
    match message {
        AppMessage::Key(key) => handle_key_event(state, key),
        AppMessage::Resize => {}
        AppMessage::QueryChanged(query) => state.set_query(query),
        AppMessage::InputFailed(error) => {
            return Err(anyhow!("failed to read terminal input: {error}"));
        }
    }
    Ok(())
}

fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => state.should_quit = true,
            KeyCode::Char('u') => state.search_bar.clear(),
            _ => {}
        }
        return;
    }

    match state.search_bar.state() {
        SearchState::Idle => handle_idle_key_event(state, key),
        SearchState::ReadyToType | SearchState::Typing => handle_input_key_event(state, key),
    }
}

fn handle_idle_key_event(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Enter => state.search_bar.on_search_tapped(),
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        _ => {}
    }
}

fn handle_input_key_event(state: &mut AppState, key: KeyEvent) {
    let bar = &mut state.search_bar;
    match key.code {
        KeyCode::Esc => bar.on_clear_tapped(),
        KeyCode::Enter => bar.on_editor_action(EditorAction::Search),
        KeyCode::Backspace => {
            refocus_input(bar);
            if bar.input_mut().backspace() {
                bar.on_text_changed();
            }
        }
        KeyCode::Down => state.move_down(),
        KeyCode::Up => state.move_up(),
        KeyCode::Char(ch) => {
            if !ch.is_control() {
                refocus_input(bar);
                bar.input_mut().push_char(ch);
                bar.on_text_changed();
            }
        }
        _ => {}
    }
}

/// Edit keys act as a tap on the field, so typing after a clear tap or submit
/// brings the cursor back.
fn refocus_input(bar: &mut SearchBar) {
    if !bar.children().input.is_focused() || !bar.keyboard().is_shown() {
        bar.on_input_tapped();
    }
}

/// Panics caught around the search bar listener still reach the panic hook;
/// send them to the log file instead of drawing over the alternate screen.
fn log_panic(info: &PanicHookInfo<'_>) {
    tracing::error!(panic = %info, "panic while running search bar demo");
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut out = stdout();
    execute!(out, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(out);
    let terminal = Terminal::new(backend).context("failed to create ratatui terminal")?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{connect_listener, handle_key_event, log_panic, process_message};
    use crate::app::events::AppMessage;
    use crate::app::state::AppState;
    use crate::config::SearchBarConfig;
    use crate::elements::TextInput;
    use crate::test_support::captured_log;
    use crate::widget::{SearchBar, SearchState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::panic;
    use tokio::sync::mpsc;

    fn state() -> AppState {
        AppState::new(
            SearchBar::from_config(&SearchBarConfig::default()),
            vec!["cat".to_owned(), "dog".to_owned()],
        )
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn slash_opens_and_escape_steps_back() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        assert_eq!(state.search_bar.state(), SearchState::ReadyToType);

        type_text(&mut state, "ca");
        assert_eq!(state.search_bar.state(), SearchState::Typing);
        assert_eq!(state.search_bar.query(), "ca");

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.search_bar.state(), SearchState::ReadyToType);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.search_bar.state(), SearchState::Idle);
        assert!(!state.should_quit);

        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut state = state();
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "q");

        assert!(!state.should_quit);
        assert_eq!(state.search_bar.query(), "q");
    }

    #[test]
    fn backspace_on_empty_field_does_not_transition() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.search_bar.state(), SearchState::ReadyToType);
    }

    #[test]
    fn ctrl_u_resets_from_typing() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "dog");
        handle_key_event(
            &mut state,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );

        assert_eq!(state.search_bar.state(), SearchState::Idle);
        assert_eq!(state.search_bar.query(), "");
    }

    #[test]
    fn listener_messages_update_results() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = state();
        connect_listener(&mut state.search_bar, tx);

        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "dog");
        while let Ok(message) = rx.try_recv() {
            process_message(&mut state, message).unwrap();
        }

        assert_eq!(state.query(), "dog");
        assert_eq!(state.result_items().collect::<Vec<_>>(), vec!["dog"]);
    }

    #[test]
    fn closed_loop_does_not_break_editing() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut state = state();
        connect_listener(&mut state.search_bar, tx);

        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "x");

        assert_eq!(state.search_bar.state(), SearchState::Typing);
        assert_eq!(state.search_bar.query(), "x");
    }

    #[test]
    fn input_failure_ends_the_loop() {
        let mut state = state();
        let result = process_message(&mut state, AppMessage::InputFailed("gone".to_owned()));
        assert!(result.is_err());
    }

    #[test]
    fn typing_after_clear_tap_refocuses_input() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "c");
        press(&mut state, KeyCode::Esc);
        assert!(!state.search_bar.children().input.is_focused());

        type_text(&mut state, "d");

        assert_eq!(state.search_bar.state(), SearchState::Typing);
        assert_eq!(state.search_bar.query(), "d");
        assert!(state.search_bar.children().input.is_focused());
        assert!(state.search_bar.keyboard().is_shown());
    }

    #[test]
    fn editing_after_submit_shows_cursor_again() {
        let mut state = state();
        press(&mut state, KeyCode::Char('/'));
        type_text(&mut state, "ca");
        press(&mut state, KeyCode::Enter);
        assert!(!state.search_bar.keyboard().is_shown());

        press(&mut state, KeyCode::Backspace);

        assert_eq!(state.search_bar.query(), "c");
        assert!(state.search_bar.keyboard().is_shown());
        assert_eq!(state.search_bar.keyboard().show_requests(), 2);
    }

    #[test]
    fn panics_are_routed_to_the_log() {
        let log = captured_log(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(log_panic));
            let result = panic::catch_unwind(|| {
                panic!("listener blew up");
            });
            panic::set_hook(previous);
            assert!(result.is_err());
        });

        assert!(log.contains("listener blew up"), "log was: {log}");
        assert!(log.contains("ERROR"), "log was: {log}");
    }
}
