//! Shared styles for the TUI.

use ratatui::style::{Color, Modifier, Style};
use std::sync::{OnceLock, RwLock};

/// Runtime theme palette used by the renderer.
#[derive(Debug, Clone)]
pub struct ThemePalette {
    pub border: Color,
    pub title: Color,
    pub dim: Color,
    pub text: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub info: Color,
    pub icon: Color,
    pub error: Color,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            border: Color::Rgb(196, 120, 50),
            title: Color::Rgb(235, 170, 90),
            dim: Color::DarkGray,
            text: Color::Rgb(210, 210, 200),
            selected_fg: Color::Black,
            selected_bg: Color::Rgb(226, 180, 92),
            info: Color::Cyan,
            icon: Color::LightYellow,
            error: Color::Red,
        }
    }
}

static ACTIVE_THEME: OnceLock<RwLock<ThemePalette>> = OnceLock::new();

fn store() -> &'static RwLock<ThemePalette> {
    ACTIVE_THEME.get_or_init(|| RwLock::new(ThemePalette::default()))
}

fn with_palette<T>(f: impl FnOnce(&ThemePalette) -> T) -> T {
    let guard = store().read().expect("theme lock poisoned");
    f(&guard)
}

/// Installs the active runtime theme palette.
pub fn apply(palette: ThemePalette) {
    if let Ok(mut guard) = store().write() {
        *guard = palette;
    }
}

pub fn border() -> Style {
    with_palette(|theme| Style::default().fg(theme.border))
}

pub fn title() -> Style {
    with_palette(|theme| {
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD)
    })
}

pub fn dim() -> Style {
    with_palette(|theme| Style::default().fg(theme.dim))
}

pub fn text() -> Style {
    with_palette(|theme| Style::default().fg(theme.text))
}

pub fn selected() -> Style {
    with_palette(|theme| Style::default().fg(theme.selected_fg).bg(theme.selected_bg))
}

pub fn info() -> Style {
    with_palette(|theme| Style::default().fg(theme.info))
}

pub fn icon() -> Style {
    with_palette(|theme| Style::default().fg(theme.icon))
}

pub fn error() -> Style {
    with_palette(|theme| Style::default().fg(theme.error))
}
