//! Jotter - a terminal journal with a word-wrapping markdown editor.
//!
//! # Usage
//!
//! ```bash
//! jotter                     # write a new entry
//! jotter --title "Monday"    # new entry with an explicit title
//! jotter 12                  # edit entry 12
//! jotter 12 --view           # read entry 12
//! jotter --list
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use jotter::app::{App, StartMode};
use jotter::config::{
    ConfigFlags, ThemeMode, clear_config_flags, default_journal_path, global_config_path,
    load_config_flags, local_override_path, save_config_flags,
};
use jotter::store::Store;

/// A terminal journal with a word-wrapping markdown editor
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
struct Cli {
    /// Entry to edit (or view with --view); omit to write a new one
    #[arg(value_name = "ID")]
    id: Option<u64>,

    /// Open the entry read-only
    #[arg(long, requires = "id")]
    view: bool,

    /// Title for a new entry (default: its first line)
    #[arg(long, conflicts_with = "id")]
    title: Option<String>,

    /// Print all entries and exit
    #[arg(long)]
    list: bool,

    /// Delete an entry and exit
    #[arg(long, value_name = "ID")]
    delete: Option<u64>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Journal file to use
    #[arg(long, value_name = "PATH")]
    journal: Option<PathBuf>,

    /// Write logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            theme: self.theme,
            journal: self.journal.clone(),
            log_file: self.log_file.clone(),
        }
    }

    const fn uses_terminal(&self) -> bool {
        !self.list && self.delete.is_none()
    }
}

fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn list_entries(store: &Store) {
    let entries = store.entries();
    if entries.is_empty() {
        println!("No entries in {}", store.path().display());
        return;
    }
    for entry in entries {
        println!("{:>4}  {}  {}", entry.id, entry.date_label(), entry.title);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // The editor owns the terminal, so logs only reach stderr outside it.
    init_logging(effective.log_file.as_deref(), !cli.uses_terminal())?;

    let journal_path = effective.journal.unwrap_or_else(default_journal_path);
    let mut store = Store::open(&journal_path)
        .with_context(|| format!("Failed to open journal {}", journal_path.display()))?;

    if cli.list {
        list_entries(&store);
        return Ok(());
    }
    if let Some(id) = cli.delete {
        if !store.delete(id)? {
            anyhow::bail!("No entry with id {id}");
        }
        println!("Deleted entry {id}");
        return Ok(());
    }

    let start = match cli.id {
        Some(id) if cli.view => StartMode::View(id),
        Some(id) => StartMode::Edit(id),
        None => StartMode::New { title: cli.title },
    };
    let mut app = App::new(store)
        .with_start(start)
        .with_theme(effective.theme.unwrap_or_default());

    if let Some(message) = app.run().context("Application error")? {
        println!("{message}");
    }
    Ok(())
}
