mod cli;
mod commands;
mod config;
mod errors;
mod models;
mod parser;
mod preview;
mod profile;
mod templates;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("cvforge v{}", env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Commands::Parse(args) => commands::parse::run(&args.file, args.json),
        Commands::Templates => commands::templates::run(&config.templates_dir),
        Commands::Generate(args) => commands::generate::run(&config, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
