//! User configuration loading from `~/.searchbar/config.toml`.

use crate::ui::theme::ThemePalette;
use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".searchbar";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "searchbar.log";

const DEFAULT_TITLE: &str = "Search";
const DEFAULT_PLACEHOLDER: &str = "type to search...";

const DEFAULT_ITEMS: [&str; 10] = [
    "cat",
    "caterpillar",
    "catalog",
    "dog",
    "dogwood",
    "horse",
    "seahorse",
    "hamster",
    "parrot",
    "carrot",
];

const DEFAULT_CONFIG_TOML: &str = r##"# searchbar configuration
# Colors accept `#RRGGBB` or named ANSI colors (e.g. "yellow", "dark_gray").

[search_bar]
title = "Search"
placeholder = "type to search..."

[theme]
border = "#c47832"
title = "#ebaa5a"
dim = "dark_gray"
text = "#d2d2c8"
selected_fg = "black"
selected_bg = "#e2b45c"
info = "cyan"
icon = "light_yellow"
error = "red"

[demo]
items = ["cat", "caterpillar", "catalog", "dog", "dogwood", "horse", "seahorse", "hamster", "parrot", "carrot"]
"##;

/// Style hints for the search bar. None of these affect its state machine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchBarConfig {
    pub title: String,
    pub placeholder: String,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Application configuration loaded from disk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_bar: SearchBarConfig,
    pub theme: ThemePalette,
    pub items: Vec<String>,
}

/// Returns the config file path and creates default config if missing.
pub fn ensure_config_file() -> Result<PathBuf> {
    let path = config_path()?;
    ensure_default_config(&path)?;
    Ok(path)
}

/// Loads configuration from `~/.searchbar/config.toml`, creating defaults if missing.
pub fn load_or_create() -> Result<AppConfig> {
    let path = ensure_config_file()?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;

    parse(&content).with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Path of the log file written next to the config.
pub fn log_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOG_FILE))
}

/// Parses configuration TOML, filling anything missing with defaults.
pub fn parse(content: &str) -> Result<AppConfig> {
    let raw: RawConfig = toml::from_str(content).context("failed to parse TOML")?;
    let theme = raw.theme.into_theme()?;
    let defaults = SearchBarConfig::default();

    Ok(AppConfig {
        search_bar: SearchBarConfig {
            title: raw.search_bar.title.unwrap_or(defaults.title),
            placeholder: raw.search_bar.placeholder.unwrap_or(defaults.placeholder),
        },
        theme,
        items: raw
            .demo
            .items
            .unwrap_or_else(|| DEFAULT_ITEMS.iter().map(|item| (*item).to_owned()).collect()),
    })
}

/// Reads one item per non-blank line.
pub fn load_items(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read items file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn config_dir() -> Result<PathBuf> {
    let home =
        env::var_os("HOME").ok_or_else(|| anyhow!("HOME environment variable is not set"))?;
    Ok(PathBuf::from(home).join(CONFIG_DIR))
}

fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

fn ensure_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let dir = path
        .parent()
        .ok_or_else(|| anyhow!("invalid config path: {}", path.display()))?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    fs::write(path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("failed to write default config file {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    search_bar: RawSearchBar,
    theme: RawTheme,
    demo: RawDemo,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSearchBar {
    title: Option<String>,
    placeholder: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDemo {
    items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTheme {
    border: Option<String>,
    title: Option<String>,
    dim: Option<String>,
    text: Option<String>,
    selected_fg: Option<String>,
    selected_bg: Option<String>,
    info: Option<String>,
    icon: Option<String>,
    error: Option<String>,
}

impl RawTheme {
    fn into_theme(self) -> Result<ThemePalette> {
        let defaults = ThemePalette::default();

        Ok(ThemePalette {
            border: parse_or_default(self.border, defaults.border, "theme.border")?,
            title: parse_or_default(self.title, defaults.title, "theme.title")?,
            dim: parse_or_default(self.dim, defaults.dim, "theme.dim")?,
            text: parse_or_default(self.text, defaults.text, "theme.text")?,
            selected_fg: parse_or_default(
                self.selected_fg,
                defaults.selected_fg,
                "theme.selected_fg",
            )?,
            selected_bg: parse_or_default(
                self.selected_bg,
                defaults.selected_bg,
                "theme.selected_bg",
            )?,
            info: parse_or_default(self.info, defaults.info, "theme.info")?,
            icon: parse_or_default(self.icon, defaults.icon, "theme.icon")?,
            error: parse_or_default(self.error, defaults.error, "theme.error")?,
        })
    }
}

fn parse_or_default(value: Option<String>, default: Color, field: &str) -> Result<Color> {
    match value {
        Some(raw) => parse_color(raw.trim())
            .with_context(|| format!("invalid color value for `{field}`: {raw}")),
        None => Ok(default),
    }
}

fn parse_color(raw: &str) -> Result<Color> {
    if let Some(hex) = raw.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(anyhow!("hex colors must be in #RRGGBB format"));
        }
        let red = u8::from_str_radix(&hex[0..2], 16).context("invalid red hex channel")?;
        let green = u8::from_str_radix(&hex[2..4], 16).context("invalid green hex channel")?;
        let blue = u8::from_str_radix(&hex[4..6], 16).context("invalid blue hex channel")?;
        return Ok(Color::Rgb(red, green, blue));
    }

    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    let color = match normalized.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return Err(anyhow!("unsupported color format")),
    };

    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CONFIG_TOML, SearchBarConfig, parse, parse_color};
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    #[test]
    fn parse_color_supports_hex() {
        assert_eq!(
            parse_color("#112233").unwrap(),
            Color::Rgb(0x11, 0x22, 0x33)
        );
    }

    #[test]
    fn parse_color_supports_named_values() {
        assert_eq!(parse_color("light_yellow").unwrap(), Color::LightYellow);
        assert_eq!(parse_color("dark-gray").unwrap(), Color::DarkGray);
    }

    #[test]
    fn default_file_parses() {
        let config = parse(DEFAULT_CONFIG_TOML).unwrap();

        assert_eq!(config.search_bar, SearchBarConfig::default());
        assert_eq!(config.items.len(), 10);
        assert_eq!(config.theme.border, Color::Rgb(0xc4, 0x78, 0x32));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config.search_bar.title, "Search");
        assert_eq!(config.items.first().map(String::as_str), Some("cat"));
    }

    #[test]
    fn partial_search_bar_section_keeps_other_defaults() {
        let config = parse("[search_bar]\ntitle = \"Contacts\"\n").unwrap();

        assert_eq!(config.search_bar.title, "Contacts");
        assert_eq!(config.search_bar.placeholder, "type to search...");
    }

    #[test]
    fn invalid_color_names_the_field() {
        let error = parse("[theme]\nborder = \"#12\"\n").unwrap_err();
        assert!(format!("{error:#}").contains("theme.border"));
    }

    #[test]
    fn multibyte_hex_color_is_an_error() {
        let error = parse("[theme]\nborder = \"#a€bc\"\n").unwrap_err();
        assert!(format!("{error:#}").contains("theme.border"));
        assert!(parse_color("#a€bc").is_err());
    }
}
