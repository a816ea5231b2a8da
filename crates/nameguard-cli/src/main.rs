//! nameguard CLI - Asset naming convention validation
//!
//! This binary validates asset manifests against a naming configuration and
//! plans renames for misnamed assets.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nameguard_cli::commands;

/// nameguard - Asset Naming Convention Validator
#[derive(Parser)]
#[command(name = "nameguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log per-asset classification details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the names of every asset in a manifest
    Validate {
        /// Path to the naming configuration (JSON or YAML)
        #[arg(short, long)]
        config: String,

        /// Path to the asset manifest (JSON or YAML)
        #[arg(short, long)]
        manifest: String,

        /// Only validate assets under these container paths (repeatable)
        #[arg(long)]
        scope: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Only report failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Plan renames for misnamed assets
    Rename {
        /// Path to the naming configuration (JSON or YAML)
        #[arg(short, long)]
        config: String,

        /// Path to the asset manifest (JSON or YAML)
        #[arg(short, long)]
        manifest: String,

        /// Write accepted renames to this JSON file
        #[arg(long)]
        plan: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved rule table
    Rules {
        /// Path to the naming configuration (JSON or YAML)
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            config,
            manifest,
            scope,
            json,
            quiet,
        } => commands::validate::run(&config, &manifest, &scope, json, quiet),
        Commands::Rename {
            config,
            manifest,
            plan,
            json,
        } => commands::rename::run(&config, &manifest, plan.as_deref(), json),
        Commands::Rules { config, json } => commands::rules::run(&config, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
