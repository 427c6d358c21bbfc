//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Content indexing and query core for a Markdown blog and portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    #[command(alias = "l")]
    List {
        /// Type of content to list (post, work, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Search posts by title
    #[command(alias = "s")]
    Search {
        /// Substring to match against post titles (case-insensitive)
        query: String,
    },

    /// Validate all posts and work items
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = folio::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Search { query } => {
            folio::commands::search::run(&site, &query)?;
        }

        Commands::Check => {
            folio::commands::check::run(&site)?;
        }
    }

    Ok(())
}
