use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};
use searchbar::app::{self, AppConfig, editor};
use searchbar::config;
use searchbar::harness;
use searchbar::ui::theme;
use searchbar::widget::SearchBar;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Collapsible search bar demo over a fuzzy-filtered item list.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Title shown while the search bar is collapsed. Overrides the config file.
    #[arg(long)]
    title: Option<String>,

    /// File with one searchable item per line. Overrides the config file.
    #[arg(long)]
    items: Option<PathBuf>,

    /// Render deterministic frames to stdout without entering interactive mode.
    #[arg(long, default_value_t = false)]
    harness_dump: bool,

    /// Harness frame width.
    #[arg(long, default_value_t = 80)]
    harness_width: u16,

    /// Harness frame height.
    #[arg(long, default_value_t = 16)]
    harness_height: u16,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or edit searchbar configuration.
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("config_action")
        .required(true)
        .multiple(false)
        .args(["edit", "path"])
))]
struct ConfigCommand {
    /// Open the config file in $VISUAL/$EDITOR/nvim/vim/vi.
    #[arg(long)]
    edit: bool,

    /// Print the config file path.
    #[arg(long)]
    path: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    if let Some(Command::Config(command)) = cli.command {
        return handle_config_command(command);
    }

    let mut config = config::load_or_create()?;
    theme::apply(config.theme.clone());

    if let Some(title) = cli.title {
        config.search_bar.title = title;
    }
    if let Some(path) = cli.items.as_deref() {
        config.items = config::load_items(path)?;
    }

    if cli.harness_dump {
        let dump = harness::render_demo_dump(&config, cli.harness_width, cli.harness_height)?;
        println!("{dump}");
        return Ok(());
    }

    tracing::info!(items = config.items.len(), "starting search bar demo");

    app::run(AppConfig {
        search_bar: SearchBar::from_config(&config.search_bar),
        items: config.items,
    })
    .await
}

/// Logs go to a file because stdout belongs to the TUI.
fn init_logging() -> anyhow::Result<()> {
    let path = config::log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn handle_config_command(command: ConfigCommand) -> anyhow::Result<()> {
    let path = config::ensure_config_file()?;

    if command.path {
        println!("{}", path.display());
        return Ok(());
    }

    if command.edit {
        editor::edit_file_with_system_editor(path.as_path())?;
        return Ok(());
    }

    Ok(())
}
