use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use marquee::app::AppContext;
use marquee::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.clone())?;

    match cli.command {
        Commands::Recent { username } => {
            commands::recent(&ctx, username.as_deref(), cli.json).await?;
        }
        Commands::Films { username } => {
            commands::films(&ctx, username.as_deref(), cli.json).await?;
        }
        Commands::Watchlist { username } => {
            commands::watchlist(&ctx, username.as_deref(), cli.json).await?;
        }
        Commands::Report { username } => {
            commands::report(&ctx, username.as_deref(), cli.json).await?;
        }
    }

    Ok(())
}
