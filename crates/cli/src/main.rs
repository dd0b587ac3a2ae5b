//! Meteor CLI - Data seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Report which backing store the environment selects
//! meteor-cli mode
//!
//! # (Re)seed the local fallback store with the sample catalog
//! meteor-cli seed --force
//!
//! # Inspect collections
//! meteor-cli list products
//! meteor-cli list slides
//!
//! # Demo session management
//! meteor-cli login -e admin@store.com -p admin123
//! meteor-cli whoami
//! meteor-cli logout
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks to its user on stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "meteor-cli")]
#[command(author, version, about = "Meteor Storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which backing store the environment selects
    Mode,
    /// Seed the local fallback store with the built-in sample data
    Seed {
        /// Overwrite collections that already exist
        #[arg(long)]
        force: bool,
    },
    /// List records in a collection
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
    /// Log in and persist the session identity
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Show the persisted session identity
    Whoami,
    /// Clear the persisted session identity
    Logout,
}

#[derive(Subcommand)]
enum ListTarget {
    /// The product catalog
    Products,
    /// The carousel slides
    Slides,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mode => commands::mode::run(),
        Commands::Seed { force } => commands::seed::run(force),
        Commands::List { target } => match target {
            ListTarget::Products => commands::list::products().await,
            ListTarget::Slides => commands::list::slides().await,
        },
        Commands::Login { email, password } => commands::session::login(&email, &password).await,
        Commands::Whoami => commands::session::whoami(),
        Commands::Logout => commands::session::logout(),
    }
}
