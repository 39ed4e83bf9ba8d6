use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{AppConfig, ConfigLoader, CONFIG_ENV, DATA_ENV};
use crate::links::LinkRegistry;
use crate::storage::{self, StorageHandle};

pub mod commands;

use self::commands::{
    AddArgs, EditArgs, ListArgs, MoveArgs, RemoveArgs, ShowArgs, ThemeArgs, ViewArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "channel-picker",
    version,
    about = "Keep an ordered list of channel links to open"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the config file location (takes precedence over CHANNEL_PICKER_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the data directory (takes precedence over CHANNEL_PICKER_DATA)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Minimum log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print saved links in display order (default)
    List(ListArgs),
    /// Save a new link
    Add(AddArgs),
    /// Change the name, URL or icon of a saved link
    Edit(EditArgs),
    /// Delete a saved link
    Remove(RemoveArgs),
    /// Move a link to another position
    Move(MoveArgs),
    /// Print the URL to open for a link
    Show(ShowArgs),
    /// Show or set the colour theme
    Theme(ThemeArgs),
    /// Show or set the list/grid layout
    View(ViewArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config {
        env::set_var(CONFIG_ENV, path);
    }
    if let Some(path) = &cli.data_dir {
        env::set_var(DATA_ENV, path);
    }

    let loader = ConfigLoader::discover()?;
    loader.paths().ensure_directories()?;
    init_tracing(&cli.log_level)
        .with_context(|| format!("initialising logging at level {}", cli.log_level))?;
    let config = loader.load_or_init()?;
    let storage = storage::init(&config.storage)?;

    let command = cli.command.unwrap_or(Commands::List(ListArgs::default()));
    let output = match command {
        Commands::List(args) => commands::list_links(&open_registry(storage, &config), &args)?,
        Commands::Add(args) => commands::add_link(&mut open_registry(storage, &config), args)?,
        Commands::Edit(args) => commands::edit_link(&mut open_registry(storage, &config), args)?,
        Commands::Remove(args) => commands::remove_link(
            &mut open_registry(storage, &config),
            args,
            commands::confirm_removal,
        )?,
        Commands::Move(args) => commands::move_link(&mut open_registry(storage, &config), args)?,
        Commands::Show(args) => commands::show_link(&open_registry(storage, &config), &args)?,
        Commands::Theme(args) => commands::theme(&storage, args)?,
        Commands::View(args) => commands::view(&storage, args)?,
    };
    print!("{output}");
    Ok(())
}

fn open_registry(storage: StorageHandle, config: &AppConfig) -> LinkRegistry<StorageHandle> {
    let mut registry = LinkRegistry::new(storage, config.links.clone());
    registry.initialize();
    registry
}

fn init_tracing(level: &str) -> Result<()> {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_try_init(|| {
        let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(())
    })
    .map(|_| ())
}
