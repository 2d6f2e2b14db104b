//! Footer hints for each search bar state.

use crate::ui::components::footer::Hint;
use crate::widget::SearchState;

const IDLE: &[Hint] = &[
    Hint {
        key: "[/ or enter]",
        desc: "search",
    },
    Hint {
        key: "[q/esc]",
        desc: "quit",
    },
];

const READY: &[Hint] = &[
    Hint {
        key: "[type]",
        desc: "edit query",
    },
    Hint {
        key: "[up/down]",
        desc: "navigate",
    },
    Hint {
        key: "[enter]",
        desc: "hide cursor",
    },
    Hint {
        key: "[esc]",
        desc: "close",
    },
    Hint {
        key: "[C-c]",
        desc: "quit",
    },
];

const TYPING: &[Hint] = &[
    Hint {
        key: "[type]",
        desc: "edit query",
    },
    Hint {
        key: "[up/down]",
        desc: "navigate",
    },
    Hint {
        key: "[enter]",
        desc: "hide cursor",
    },
    Hint {
        key: "[esc]",
        desc: "clear text",
    },
    Hint {
        key: "[C-u]",
        desc: "reset",
    },
    Hint {
        key: "[C-c]",
        desc: "quit",
    },
];

pub fn build(state: SearchState) -> &'static [Hint] {
    match state {
        SearchState::Idle => IDLE,
        SearchState::ReadyToType => READY,
        SearchState::Typing => TYPING,
    }
}
