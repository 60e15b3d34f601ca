//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod browse;
mod records;

use anyhow::Result;
use clap::Subcommand;
use corral_core::page::{DEFAULT_PAGE_SIZE, PAGE_SIZES};

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show a page of the registry table
    List {
        /// Zero-based page to show
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
        page_size: usize,
    },
    /// Show one unicorn
    Get {
        /// Record id
        id: String,
    },
    /// Create a new unicorn
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        colour: String,
    },
    /// Edit an existing unicorn
    ///
    /// Unspecified fields keep their current server-side values.
    Edit {
        /// Record id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        colour: Option<String>,
    },
    /// Delete a unicorn
    Delete {
        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Browse the registry in an interactive paged table
    Browse,
}

/// Parse and bounds-check a rows-per-page value
fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a number", s))?;
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZES))
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List { page, page_size } => records::list(config, page, page_size).await,
        Commands::Get { id } => records::get(config, &id).await,
        Commands::Add { name, age, colour } => records::add(config, name, age, colour).await,
        Commands::Edit {
            id,
            name,
            age,
            colour,
        } => records::edit(config, &id, name, age, colour).await,
        Commands::Delete { id, yes } => records::delete(config, &id, yes).await,
        Commands::Browse => browse::run(config).await,
    }
}
