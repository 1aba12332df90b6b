//! Counsel CLI - Command line interface for Counsel
//!
//! AI contract review from the browser or the terminal.

mod commands;
mod web;

use clap::{Parser, Subcommand};
use counsel_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ConfigArgs, ReviewArgs, ServeArgs};

/// Counsel: AI contract review with a team of specialist agents
#[derive(Parser, Debug)]
#[command(name = "counsel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "COUNSEL_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Serve the contract review web UI
    #[command(visible_alias = "s")]
    Serve(ServeArgs),

    /// Review a PDF contract in the terminal
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Show current configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let addr = match &cli.command {
        Some(Commands::Serve(args)) => args.addr.clone(),
        _ => None,
    };

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.model.clone(), addr)?;

    if cli.verbose {
        tracing::info!(
            model = %config.model.model,
            notifier_enabled = config.notifier.is_enabled(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("counsel {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Serve(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Review(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config(args)) => {
            args.execute(&config)?;
        }
        None => {
            println!("Counsel - AI contract review");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
