//! Parcelbot CLI library.
//!
//! The presentation harness around the resolver: configuration management,
//! the chat session log, the interactive chat loop and output formatting.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;
