use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio and project gallery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Page to open on, e.g. "/" or "/projects.html"
        #[arg(short, long, default_value = "/")]
        page: String,
    },
    /// List the projects a page shows
    List {
        #[arg(short, long, default_value = "/projects.html")]
        page: String,
    },
    /// Print one project's details
    Show {
        /// Project id
        id: String,
    },
    /// Render a page to a standalone HTML file
    Build {
        #[arg(short, long, default_value = "/")]
        page: String,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or change the stored dark/light preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored mode
    Show,
    /// Flip between dark and light
    Toggle,
    /// List the built-in terminal palettes
    Palettes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let tui = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, tui)?;

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, &page).await,
        None => commands::run::run(config, "/").await,
        Some(Commands::List { page }) => commands::list::run(&config, &page),
        Some(Commands::Show { id }) => commands::show::run(&config, &id),
        Some(Commands::Build { page, output }) => {
            commands::build::run(config, &page, output.as_deref())
        }
        Some(Commands::Theme { action }) => match action {
            Some(ThemeAction::Toggle) => commands::theme::toggle(&config),
            Some(ThemeAction::Palettes) => commands::theme::palettes(&config),
            Some(ThemeAction::Show) | None => commands::theme::show(&config),
        },
    }
}

/// Log to stderr, or to a file under the data dir while the TUI owns the terminal
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if tui {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
