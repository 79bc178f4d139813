//! CLI definitions using clap derive API

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cvforge: résumé markup parser and document generator
///
/// Parses tag-markup résumé text (`{section}...{:section}`) into structured
/// data and merges author details into document templates.
#[derive(Parser, Debug)]
#[command(name = "cvforge", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a résumé file and print a structured preview
    Parse(ParseArgs),

    /// List available document templates
    Templates,

    /// Generate a document from a template and the author profile
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Path to the tag-markup résumé text
    pub file: PathBuf,

    /// Print the parsed structure as JSON instead of a preview
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the tag-markup résumé text
    pub file: PathBuf,

    /// Template file name (see `cvforge templates`)
    #[arg(long, short = 't')]
    pub template: String,

    /// Output file name (defaults to the template name)
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}
