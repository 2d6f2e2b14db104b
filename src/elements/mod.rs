//! Child-element capabilities consumed by the search bar.
//!
//! The widget never owns a layout; the host hands it four elements and a
//! keyboard service implementing these traits.

mod terminal;

pub use self::terminal::{Button, CursorKeyboard, Label, TextField};

/// Icons the search bar can place inside its text input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Icon {
    Search,
}

impl Icon {
    /// Glyph used when the icon is drawn in a terminal cell.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Search => "⌕",
        }
    }
}

/// Anything the search bar can show or hide.
pub trait Element {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// A read-only text element, used for the idle title.
pub trait TextLabel: Element {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> &str;
}

/// The editable query field.
pub trait TextInput: Element {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
    fn clear_text(&mut self);
    fn focus(&mut self);
    fn clear_focus(&mut self);
    fn is_focused(&self) -> bool;
    /// Decorates the end of the field. `None` removes the decoration.
    fn set_trailing_icon(&mut self, icon: Option<Icon>);
    fn trailing_icon(&self) -> Option<Icon>;
}

/// Fire-and-forget on-screen keyboard service.
pub trait SoftKeyboard {
    fn show(&mut self);
    fn hide(&mut self);
}
