//! Hibhana CLI - Database migrations and catalog seeding.
//!
//! # Usage
//!
//! ```bash
//! # Create the storefront sessions table
//! hibhana-cli migrate storefront
//!
//! # Create the admin sessions table
//! hibhana-cli migrate admin
//!
//! # Both databases
//! hibhana-cli migrate all
//!
//! # Seed the Firestore catalog from a YAML file
//! hibhana-cli seed --file seed/catalog.yaml
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the session tables
//! - `seed` - Seed the Firestore catalog from YAML

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hibhana-cli")]
#[command(author, version, about = "Hibhana CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        target: MigrateTarget,
    },
    /// Seed the Firestore catalog with documents from a YAML file
    Seed {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: String,
    },
}

#[derive(Subcommand)]
enum MigrateTarget {
    /// Create the storefront sessions table
    Storefront,
    /// Create the admin sessions table
    Admin,
    /// Migrate both databases
    All,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate { target } => match target {
            MigrateTarget::Storefront => commands::migrate::storefront().await?,
            MigrateTarget::Admin => commands::migrate::admin().await?,
            MigrateTarget::All => {
                commands::migrate::storefront().await?;
                commands::migrate::admin().await?;
            }
        },
        Commands::Seed { file } => commands::seed::catalog(&file).await?,
    }
    Ok(())
}
