//! Messages delivered to the UI event loop and the terminal input reader.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Message sent to the UI event loop.
#[derive(Debug)]
pub enum AppMessage {
    Key(KeyEvent),
    Resize,
    /// Sent by the search bar listener after every edit.
    QueryChanged(String),
    InputFailed(String),
}

/// Spawns a blocking reader forwarding terminal key presses until the receiver closes.
pub fn spawn_input_reader(tx: UnboundedSender<AppMessage>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            let message = match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        AppMessage::Key(key)
                    }
                    Ok(Event::Resize(..)) => AppMessage::Resize,
                    Ok(_) => continue,
                    Err(error) => AppMessage::InputFailed(error.to_string()),
                },
                Err(error) => AppMessage::InputFailed(error.to_string()),
            };

            let failed = matches!(message, AppMessage::InputFailed(_));
            if tx.send(message).is_err() || failed {
                break;
            }
        }
    });
}
