//! GENAE CLI - Drive the storefront cart from event scripts.
//!
//! # Usage
//!
//! ```bash
//! # Print the initial (empty) page state
//! genae-cart render
//!
//! # Replay a JSON-lines event script, one page update per line
//! genae-cart replay session.jsonl
//!
//! # Replay a YAML event list with pretty-printed output
//! genae-cart replay session.yaml --pretty
//! ```
//!
//! # Event scripts
//!
//! Each event is an object tagged by `type`, e.g.
//! `{"type":"add_to_cart","id":"genae-01","name":"Sakura","price":"1280"}`.
//! JSON-lines scripts may contain blank lines and `#` comments.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "genae-cart")]
#[command(author, version, about = "GENAE storefront cart tools")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the initial page state
    Render {
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Replay an event script against a fresh page
    Replay {
        /// Path to a `.jsonl`/`.json` or `.yaml`/`.yml` event script
        script: PathBuf,

        /// Pretty-print each page update
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "genae_storefront=info,genae_cli=info".into());

    // Logs go to stderr; stdout carries page updates
    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Render { pretty } => commands::render::initial_page(pretty)?,
        Commands::Replay { script, pretty } => commands::replay::run(&script, pretty)?,
    }
    Ok(())
}
