//! Terminal-backed elements rendered by [`crate::ui`].

use super::{Element, Icon, SoftKeyboard, TextInput, TextLabel};

#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            visible: true,
        }
    }
}

impl Element for Label {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TextLabel for Label {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// A tappable control drawn as a bracketed caption, e.g. `[x]`.
#[derive(Debug, Clone, Default)]
pub struct Button {
    caption: String,
    visible: bool,
}

impl Button {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            visible: true,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl Element for Button {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Single-line text field edited one character at a time.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    placeholder: String,
    visible: bool,
    focused: bool,
    trailing_icon: Option<Icon>,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Removes the last character. Returns `false` when the field was already empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }
}

impl Element for TextField {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl TextInput for TextField {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn clear_text(&mut self) {
        self.text.clear();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn clear_focus(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_trailing_icon(&mut self, icon: Option<Icon>) {
        self.trailing_icon = icon;
    }

    fn trailing_icon(&self) -> Option<Icon> {
        self.trailing_icon
    }
}

/// In a terminal the "keyboard" is the visible input cursor.
#[derive(Debug, Clone, Default)]
pub struct CursorKeyboard {
    shown: bool,
    show_requests: usize,
}

impl CursorKeyboard {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Number of show requests received so far.
    pub fn show_requests(&self) -> usize {
        self.show_requests
    }
}

impl SoftKeyboard for CursorKeyboard {
    fn show(&mut self) {
        self.shown = true;
        self.show_requests += 1;
    }

    fn hide(&mut self) {
        self.shown = false;
    }
}
