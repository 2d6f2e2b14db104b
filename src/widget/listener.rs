//! Guarded invocation of the text-change listener.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Callback receiving the full query text after every edit.
pub type TextChangedListener = Box<dyn FnMut(&str) -> anyhow::Result<()>>;

/// A fault raised by the listener while handling a text change.
#[derive(Debug, Error)]
pub enum ListenerFault {
    #[error("{0:#}")]
    Failed(anyhow::Error),
    #[error("listener panicked: {0}")]
    Panicked(String),
}

/// Runs the listener, turning both returned errors and panics into a [`ListenerFault`].
///
/// A caught panic still goes through the process panic hook first. Hosts that
/// own the terminal should install a hook that writes to the log.
pub(super) fn invoke_guarded(
    listener: &mut TextChangedListener,
    query: &str,
) -> Result<(), ListenerFault> {
    match panic::catch_unwind(AssertUnwindSafe(|| listener(query))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(ListenerFault::Failed(error)),
        Err(payload) => Err(ListenerFault::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_owned();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".to_owned()
}

#[cfg(test)]
mod tests {
    use super::{ListenerFault, TextChangedListener, invoke_guarded};
    use anyhow::anyhow;

    #[test]
    fn returned_error_becomes_failed_fault() {
        let mut listener: TextChangedListener = Box::new(|query: &str| -> anyhow::Result<()> {
            Err(anyhow!("no results for {query}"))
        });

        let fault = invoke_guarded(&mut listener, "cat").unwrap_err();
        assert!(matches!(fault, ListenerFault::Failed(_)));
        assert_eq!(fault.to_string(), "no results for cat");
    }

    #[test]
    fn panic_is_caught_with_its_message() {
        let mut listener: TextChangedListener = Box::new(|_: &str| -> anyhow::Result<()> {
            panic!("listener exploded")
        });

        let fault = invoke_guarded(&mut listener, "cat").unwrap_err();
        assert_eq!(fault.to_string(), "listener panicked: listener exploded");
    }

    #[test]
    fn successful_listener_passes_through() {
        let mut listener: TextChangedListener = Box::new(|_: &str| Ok(()));
        assert!(invoke_guarded(&mut listener, "").is_ok());
    }
}
