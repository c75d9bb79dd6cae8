//! Command-line interfaces
//!
//! - `librarian-util` takes a fixed positional/flag layout, validated by hand
//!   in [`dispatcher`].
//! - `design-info` is parsed with clap ([`DesignInfoCli`]).

pub mod commands;
pub mod dispatcher;

pub use dispatcher::{dispatch, parse, usage, COMMAND_NAME, REQUIRED_FLAGS};

use clap::Parser;

/// Summarise embroidery design files into a CSV
#[derive(Parser, Debug)]
#[command(name = "design-info")]
#[command(version, about, long_about = None)]
#[command(author = "Stitchkit Contributors")]
pub struct DesignInfoCli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "STITCHKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub summarize: commands::summarize::SummarizeArgs,
}
