//! Command-line interface for dirtree.
//!
//! Builds the tree for one directory and prints it as tree text or JSON.

use clap::{Parser, ValueEnum};
use dirtree::{DirTreeBuilder, DirTreeOptions, SortOrder, build_with, output};
use std::path::PathBuf;
use std::process::exit;

/// dirtree — directory snapshot as a tree
#[derive(Parser, Debug)]
#[command(name = "dirtree", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Indented JSON
    #[arg(short, long)]
    pretty: bool,

    /// Entry order within each directory
    #[arg(long, value_enum, default_value_t = Order::Filesystem)]
    sort: Order,

    /// List symlinks as files instead of descending into linked directories
    #[arg(long)]
    no_follow_links: bool,

    /// Diagnostics written to stderr
    #[arg(long, short, value_enum, default_value_t = LogLevel::Silent)]
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Filesystem,
    Name,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[cfg_attr(not(feature = "logging"), allow(dead_code))]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    #[cfg(feature = "logging")]
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Trace => Some(tracing::Level::TRACE),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

impl Cli {
    fn into_options(self) -> (DirTreeOptions, output::OutputFormat, bool) {
        let sort = match self.sort {
            Order::Filesystem => SortOrder::Filesystem,
            Order::Name => SortOrder::Name,
        };
        let format = match self.format {
            OutputFormat::Tree => output::OutputFormat::Tree,
            OutputFormat::Json => output::OutputFormat::Json,
        };
        let options = DirTreeBuilder::new(self.root)
            .sort(sort)
            .follow_links(!self.no_follow_links)
            .build();
        (options, format, self.pretty)
    }
}

#[cfg(feature = "logging")]
fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    setup_tracing(cli.log_level);
    let (options, format, pretty) = cli.into_options();

    let result = build_with(&options).and_then(|root| output::format_node(&root, format, pretty));
    match result {
        Ok(text) => {
            print!("{}", text);
            if format == output::OutputFormat::Json {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
