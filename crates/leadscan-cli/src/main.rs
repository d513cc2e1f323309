//! CLI application for badge scan capture.

mod commands;
mod notify;
mod store;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, manual, open, scan};

/// Badge scan capture - create CRM records from scanned badge payloads
#[derive(Parser)]
#[command(name = "leadscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one scanned payload
    Scan(scan::ScanArgs),

    /// Submit manually entered contact fields
    Manual(manual::ManualArgs),

    /// Open the record creation form instead of scanning
    Open(open::OpenArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Scan(args) => scan::run(args, cli.config.as_deref()).await,
        Commands::Manual(args) => manual::run(args, cli.config.as_deref()).await,
        Commands::Open(args) => open::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
