//! CLI module for backup-seeds
//!
//! - Argument parsing (`args`)
//! - Translation of arguments into a command configuration (`setup`)

pub mod args;
pub mod setup;

pub use args::Cli;
pub use setup::{classify_config_from, create_formatting_config};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
