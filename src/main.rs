//! `kite`: open a file in the modal editor.

use anyhow::{Context, Result};
use clap::Parser;
use kite::{CrosstermTerminal, Editor, EditorConfig, Terminal};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// A small modal terminal text editor.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File to edit. Created on first save if it does not exist.
    path: Option<PathBuf>,

    /// Configuration file (defaults to ./kite.toml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write debug logs to this file. Filter with RUST_LOG.
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kite=debug")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(log) = &args.log {
        init_logging(log)?;
    }

    let cwd = std::env::current_dir().context("cannot read working directory")?;
    let config = EditorConfig::discover(args.config.as_deref(), &cwd)
        .context("cannot load configuration")?;

    let result = {
        let mut terminal = CrosstermTerminal::new().context("cannot set up terminal")?;
        let (rows, cols) = terminal.size()?;
        let mut editor = Editor::new(config, rows, cols);
        if let Some(path) = &args.path {
            editor
                .open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
        }
        editor.run(&mut terminal)
        // terminal restored here, before any error is printed
    };
    result.context("editor failed")
}
