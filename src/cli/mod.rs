//! Command-line interface.
//!
//! Parses arguments, resolves settings, and dispatches to the command modules.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "shadowcipher")]
#[command(about = "Web reader for short serialized horror and spy fiction")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file (overrides config and SHADOWCIPHER_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind: PORT, HOST, or HOST:PORT (default from config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List stories, optionally filtered
    List {
        /// Language tag, or "all"
        #[arg(long)]
        lang: Option<String>,
        /// Category name, or "all"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text to find in title, description, or keywords
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print one page of a story
    Read {
        /// Story id
        id: String,
        /// Page number (out-of-range values are clamped)
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<String>,
    },

    /// Validate the catalog file
    Check,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        data: cli.data,
    };
    let settings = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Serve { bind } => {
            commands::serve::cmd_serve(&settings, bind.as_deref().unwrap_or(&settings.bind)).await
        }
        Commands::List {
            lang,
            category,
            query,
        } => {
            commands::list::cmd_list(
                &settings,
                lang.as_deref(),
                category.as_deref(),
                query.as_deref(),
            )
            .await
        }
        Commands::Read { id, page } => {
            commands::read::cmd_read(&settings, &id, page.as_deref()).await
        }
        Commands::Check => commands::check::cmd_check(&settings).await,
    }
}
