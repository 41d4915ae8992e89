//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Parcelbot - customer-service chat assistant with track & trace lookup.
#[derive(Debug, Parser)]
#[command(name = "parcelbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Tracking dataset path (tab-separated)
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// Model identifier to request from the provider
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Provider API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive chat session (the default)
    Chat,

    /// Ask a single question and print the answer
    Ask(AskArgs),

    /// Show sample rows from the tracking dataset
    Samples(SamplesArgs),

    /// Show what the assistant can help with
    Info,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,
}

/// Arguments for the samples command.
#[derive(Debug, Parser)]
pub struct SamplesArgs {
    /// Maximum number of rows to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}
