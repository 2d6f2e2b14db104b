//! Search bar states and the state-to-visibility projection.

use crate::elements::Icon;
use thiserror::Error;

/// The three visual states of the search bar.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SearchState {
    /// Title and search trigger shown, input collapsed.
    #[default]
    Idle,
    /// Input shown and focused, still empty.
    ReadyToType,
    /// Input shown with a query being edited.
    Typing,
}

/// Raised when a saved raw state value does not name a [`SearchState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("unknown search state value {0}")]
pub struct UnknownSearchState(pub i32);

impl SearchState {
    /// Stable integer encoding, used when the host saves and restores widget state.
    pub fn raw(self) -> i32 {
        match self {
            Self::Idle => -1,
            Self::ReadyToType => 0,
            Self::Typing => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ReadyToType => "ready",
            Self::Typing => "typing",
        }
    }
}

impl TryFrom<i32> for SearchState {
    type Error = UnknownSearchState;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Self::Idle),
            0 => Ok(Self::ReadyToType),
            1 => Ok(Self::Typing),
            other => Err(UnknownSearchState(other)),
        }
    }
}

/// What a state does to the input's trailing icon slot.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IconUpdate {
    Set(Icon),
    /// Leave the slot as is; text edits decide it while typing.
    Keep,
}

/// Visibility of the four child elements for one state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Visibility {
    pub title: bool,
    pub search: bool,
    pub clear: bool,
    pub input: bool,
    pub trailing_icon: IconUpdate,
}

/// Maps a state to the child-element configuration it requires.
pub fn project(state: SearchState) -> Visibility {
    match state {
        SearchState::Idle => Visibility {
            title: true,
            search: true,
            clear: false,
            input: false,
            trailing_icon: IconUpdate::Keep,
        },
        SearchState::ReadyToType => Visibility {
            title: false,
            search: false,
            clear: true,
            input: true,
            trailing_icon: IconUpdate::Set(Icon::Search),
        },
        SearchState::Typing => Visibility {
            title: false,
            search: false,
            clear: true,
            input: true,
            trailing_icon: IconUpdate::Keep,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{IconUpdate, SearchState, UnknownSearchState, project};
    use crate::elements::Icon;

    const ALL: [SearchState; 3] = [
        SearchState::Idle,
        SearchState::ReadyToType,
        SearchState::Typing,
    ];

    #[test]
    fn raw_values_map_back_to_states() {
        for state in ALL {
            assert_eq!(SearchState::try_from(state.raw()), Ok(state));
        }
        assert_eq!(SearchState::try_from(7), Err(UnknownSearchState(7)));
    }

    #[test]
    fn projection_is_stable_for_every_state() {
        for state in ALL {
            assert_eq!(project(state), project(state));
        }
    }

    #[test]
    fn title_and_input_are_never_shown_together() {
        for state in ALL {
            let visibility = project(state);
            assert_ne!(visibility.title, visibility.input);
            assert_ne!(visibility.search, visibility.clear);
        }
    }

    #[test]
    fn only_ready_state_forces_the_search_icon() {
        assert_eq!(
            project(SearchState::ReadyToType).trailing_icon,
            IconUpdate::Set(Icon::Search)
        );
        assert_eq!(project(SearchState::Idle).trailing_icon, IconUpdate::Keep);
        assert_eq!(project(SearchState::Typing).trailing_icon, IconUpdate::Keep);
    }
}
