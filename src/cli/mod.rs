pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Fetch a member's film history from a movie-logging site", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: platform config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the most recent diary entries from the member's feed
    Recent {
        /// Member username (defaults to the configured username)
        username: Option<String>,
    },
    /// List every film the member has logged
    Films {
        /// Member username (defaults to the configured username)
        username: Option<String>,
    },
    /// List the member's watchlist
    Watchlist {
        /// Member username (defaults to the configured username)
        username: Option<String>,
    },
    /// Combined report: recent entries, all films, watchlist
    Report {
        /// Member username (defaults to the configured username)
        username: Option<String>,
    },
}
