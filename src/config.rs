use clap::builder::{Styles, styling};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use tracing::Level;

const CLAP_STYLING: Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Blue.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

pub struct Config {
    pub input: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub tree: bool,
    pub progress: bool,
    pub log_level: Level,
}

/// Stores contacts in a prefix tree and counts how many share a prefix.
///
/// Reads the number of operations on the first line, then one
/// `add <contact>` or `find <prefix>` per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, styles = CLAP_STYLING)]
struct Args {
    /// Output format. (default: plain)
    #[arg(short, long, default_value = "plain")]
    format: OutputFormat,
    /// Reads operations from a file instead of standard input.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Shows progress
    #[arg(short, long)]
    progress: bool,
    /// Prints the contact tree after the answers.
    #[arg(short, long)]
    tree: bool,
    /// Increases log verbosity, can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Config {
    pub fn new() -> Self {
        Self::from_args(Args::parse())
    }

    fn from_args(args: Args) -> Self {
        Self {
            input: args.input,
            output_format: args.format,
            tree: args.tree,
            progress: args.progress,
            log_level: log_level(args.verbose),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output_format: OutputFormat::Plain,
            tree: false,
            progress: false,
            log_level: Level::WARN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
