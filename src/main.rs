//! mdpad - A structure-aware terminal markdown editor.
//!
//! # Usage
//!
//! ```bash
//! mdpad notes.md
//! mdpad --tabs notes.md
//! mdpad --theme light notes.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdpad::app::App;
use mdpad::config::{Theme, load_settings, save_settings, settings_path};
use mdpad::format::IndentUnit;

/// A structure-aware terminal markdown editor
#[derive(Parser, Debug)]
#[command(name = "mdpad", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (created on first save when missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Indent with a tab instead of two spaces
    #[arg(long)]
    tabs: bool,

    /// Indent with two spaces (overrides a saved tab preference)
    #[arg(long, conflicts_with = "tabs")]
    spaces: bool,

    /// Color theme for heading and emphasis styling
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// Save the effective indent/theme choices as defaults
    #[arg(long)]
    save_prefs: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = settings_path();
    let mut settings = load_settings(&path);

    // Command-line flags win over the settings file for this run.
    if cli.tabs {
        settings.indent = IndentUnit::Tab;
    }
    if cli.spaces {
        settings.indent = IndentUnit::Spaces;
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if cli.save_prefs {
        save_settings(&path, settings)
            .with_context(|| format!("saving preferences to {}", path.display()))?;
    }

    let app = match cli.file {
        Some(file) => App::open(file, settings)?,
        None => App::untitled(settings),
    };
    app.run().context("Application error")
}
