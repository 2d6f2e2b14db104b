//! The collapsible search bar state machine.
//!
//! [`SearchBar`] owns one [`SearchState`] and four injected child elements.
//! Every state change goes through [`SearchBar::transition`], which re-applies
//! the [`project`] output to the children, so element visibility is never
//! touched anywhere else.

mod listener;
mod state;

pub use self::listener::{ListenerFault, TextChangedListener};
pub use self::state::{IconUpdate, SearchState, UnknownSearchState, Visibility, project};

use self::listener::invoke_guarded;
use crate::config::SearchBarConfig;
use crate::elements::{
    Button, CursorKeyboard, Element, Icon, Label, SoftKeyboard, TextField, TextInput, TextLabel,
};
use std::fmt;

const COMPONENT: &str = "SearchBar";

/// The four elements composed inside a search bar.
#[derive(Debug, Clone)]
pub struct Children<L, C, I> {
    pub title: L,
    pub search: C,
    pub clear: C,
    pub input: I,
}

/// Keyboard actions reported by the text input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EditorAction {
    Search,
    Done,
    Go,
}

/// A search bar collapsing between a title and a text input.
pub struct SearchBar<L = Label, C = Button, I = TextField, K = CursorKeyboard> {
    state: SearchState,
    children: Children<L, C, I>,
    keyboard: K,
    listener: Option<TextChangedListener>,
}

impl<L: fmt::Debug, C: fmt::Debug, I: fmt::Debug, K: fmt::Debug> fmt::Debug
    for SearchBar<L, C, I, K>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBar")
            .field("state", &self.state)
            .field("children", &self.children)
            .field("keyboard", &self.keyboard)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl SearchBar {
    /// Builds a terminal search bar styled from configuration.
    pub fn from_config(config: &SearchBarConfig) -> Self {
        Self::new(
            Children {
                title: Label::new(config.title.as_str()),
                search: Button::new("/"),
                clear: Button::new("x"),
                input: TextField::new(config.placeholder.as_str()),
            },
            CursorKeyboard::default(),
        )
    }
}

impl<L, C, I, K> SearchBar<L, C, I, K>
where
    L: TextLabel,
    C: Element,
    I: TextInput,
    K: SoftKeyboard,
{
    /// Wraps the given children, starting in [`SearchState::Idle`].
    pub fn new(children: Children<L, C, I>, keyboard: K) -> Self {
        let mut bar = Self {
            state: SearchState::Idle,
            children,
            keyboard,
            listener: None,
        };
        bar.apply_visibility();
        bar
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn visibility(&self) -> Visibility {
        project(self.state)
    }

    pub fn children(&self) -> &Children<L, C, I> {
        &self.children
    }

    /// Mutable access to the input for text edits. Follow every edit with
    /// [`Self::on_text_changed`].
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.children.input
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn query(&self) -> &str {
        self.children.input.text()
    }

    /// Registers the text-change listener, replacing any previous one.
    pub fn set_on_text_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&str) -> anyhow::Result<()> + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Sets the label shown while idle.
    pub fn set_title(&mut self, text: &str) {
        self.children.title.set_text(text);
    }

    pub fn title(&self) -> &str {
        self.children.title.text()
    }

    pub fn on_search_tapped(&mut self) {
        if self.state != SearchState::Idle {
            tracing::debug!(
                component = COMPONENT,
                state = self.state.label(),
                "ignoring search tap"
            );
            return;
        }

        self.transition(SearchState::ReadyToType);
        self.children.input.focus();
        self.keyboard.show();
    }

    /// Refocuses a visible input and brings the keyboard back. No transition.
    pub fn on_input_tapped(&mut self) {
        if !self.children.input.is_visible() {
            tracing::debug!(component = COMPONENT, "ignoring tap on hidden input");
            return;
        }

        self.children.input.focus();
        self.keyboard.show();
    }

    pub fn on_clear_tapped(&mut self) {
        match self.state {
            SearchState::Idle => {
                tracing::debug!(component = COMPONENT, "ignoring clear tap while idle");
            }
            SearchState::ReadyToType => {
                self.keyboard.hide();
                self.children.input.clear_focus();
                self.transition(SearchState::Idle);
            }
            SearchState::Typing => {
                let had_text = self.clear_input_text();
                self.children.input.clear_focus();
                self.transition(SearchState::ReadyToType);
                if had_text {
                    self.notify_listener();
                }
            }
        }
    }

    /// Handles an edit of the input. The listener sees the input's full text.
    pub fn on_text_changed(&mut self) {
        self.transition(SearchState::Typing);

        let icon = self
            .children
            .input
            .text()
            .is_empty()
            .then_some(Icon::Search);
        self.children.input.set_trailing_icon(icon);

        self.notify_listener();
    }

    /// Submitting only dismisses the keyboard; state and text are kept.
    pub fn on_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Search => self.keyboard.hide(),
            EditorAction::Done | EditorAction::Go => {}
        }
    }

    /// Collapses back to idle from any state, clearing the query.
    pub fn clear(&mut self) {
        let had_text = self.clear_input_text();
        self.keyboard.hide();
        self.children.input.clear_focus();
        self.transition(SearchState::Idle);
        if had_text {
            self.notify_listener();
        }
    }

    /// Restores a state saved with [`SearchState::raw`]. Unknown values reset to idle.
    pub fn restore_raw_state(&mut self, raw: i32) {
        match SearchState::try_from(raw) {
            Ok(state) => self.transition(state),
            Err(error) => {
                tracing::warn!(component = COMPONENT, %error, "resetting search bar to idle");
                self.transition(SearchState::Idle);
            }
        }
    }

    fn transition(&mut self, next: SearchState) {
        if self.state != next {
            tracing::debug!(
                component = COMPONENT,
                from = self.state.label(),
                to = next.label(),
                "search bar transition"
            );
        }
        self.state = next;
        self.apply_visibility();
    }

    fn apply_visibility(&mut self) {
        let visibility = project(self.state);

        self.children.clear.set_visible(visibility.clear);
        self.children.input.set_visible(visibility.input);
        self.children.search.set_visible(visibility.search);
        self.children.title.set_visible(visibility.title);

        if let IconUpdate::Set(icon) = visibility.trailing_icon {
            self.children.input.set_trailing_icon(Some(icon));
        }
    }

    fn clear_input_text(&mut self) -> bool {
        let had_text = !self.children.input.text().is_empty();
        self.children.input.clear_text();
        had_text
    }

    fn notify_listener(&mut self) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };

        let query = self.children.input.text().to_owned();
        if let Err(fault) = invoke_guarded(listener, &query) {
            tracing::error!(component = COMPONENT, error = %fault, "text change listener failed");
        }
    }
}
