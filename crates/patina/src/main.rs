//! Patina CLI - blog content toolchain and publish orchestrator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "patina")]
#[command(about = "Blog content toolchain and publish orchestrator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to patina.toml config file
    #[arg(short, long, default_value = "patina.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a blog in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate content front matter
    Check {
        /// Content directory (defaults to config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Run the publish pipeline: notify, pull, build, announce
    Publish {
        /// Log every step without running any external call
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
        Commands::Check { dir } => {
            commands::check::run(&cli.config, dir)?;
        }
        Commands::Publish { dry_run } => {
            commands::publish::run(&cli.config, dry_run).await?;
        }
    }

    Ok(())
}
