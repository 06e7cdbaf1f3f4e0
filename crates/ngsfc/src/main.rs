//! Command‑line entry point for the `ngsfc` tool.
//!
//! Loads 2D point datasets, orders them along a Node-Gosper curve and writes
//! the ordering or the per-point codes as text.

use std::{fmt::Display, path::PathBuf, process};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use nodegosper::{MAX_LEVEL, registry};

/// CLI command implementations.
mod cmd;

/// Validate a pattern name against the registry.
fn parse_pattern_name(s: &str) -> Result<String, String> {
    registry::lookup(s)
        .map(|p| p.key().to_string())
        .map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "ngsfc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, global = true, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands that hash a dataset.
#[derive(Args, Clone, Debug)]
struct CurveArgs {
    #[arg(
        short = 'l',
        long = "level",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LEVEL)),
        help = "Index of the deepest curve level (codes use 3 * (LEVEL + 1) bits)"
    )]
    /// Deepest curve level.
    level: u32,

    #[arg(
        short = 'p',
        long = "pattern",
        default_value = "precise",
        value_parser = parse_pattern_name,
        help = &format!("Pattern name (options: {})", registry::PATTERN_NAMES.join(", "))
    )]
    /// Pattern name.
    pattern: String,

    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        help = "Read only the first N points; fails if the file holds fewer"
    )]
    /// Optional number of points to read.
    count: Option<usize>,

    #[arg(long = "octal", help = "Print codes in octal (one digit per level)")]
    /// Print codes in base 8.
    octal: bool,

    #[arg(help = "Dataset of whitespace separated `x y` pairs")]
    /// Input dataset.
    input: PathBuf,

    #[arg(help = "Optional output file path; writes to stdout when omitted")]
    /// Optional output file path.
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
/// Subcommands supported by the `ngsfc` tool.
enum Commands {
    #[command(about = "Order a dataset along the curve")]
    /// Write `rank index x y code` for every point, in curve order.
    Sort(CurveArgs),

    #[command(about = "Compute the code of every point")]
    /// Write `index code rank` for every point, in input order.
    Codes(CurveArgs),

    #[command(name = "list-patterns", about = "List supported indexation patterns")]
    /// List supported patterns.
    ListPatterns,
}

/// Print a success message to stderr or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => log::info!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e:#}");
            process::exit(1);
        }
    }
}

/// Map `-v` occurrences to a log level. `RUST_LOG` still takes precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

impl CurveArgs {
    /// Options for the command handlers.
    fn options(&self) -> cmd::CurveOptions<'_> {
        cmd::CurveOptions {
            input: &self.input,
            output: self.output.as_deref(),
            level: self.level,
            pattern: &self.pattern,
            count: self.count,
            octal: self.octal,
        }
    }
}

/// Handle the `list-patterns` subcommand.
fn handle_list_patterns() {
    println!("Supported patterns (key — display — description):");
    for entry in registry::REGISTRY {
        let continuity = if entry.continuous {
            "continuous"
        } else {
            "discontinuous"
        };
        println!("- {} — {} ({continuity})", entry.key, entry.display);
        for line in entry.info.lines() {
            println!("    {}", line.trim());
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Sort(args) => report_ok(cmd::sort(&args.options()), "OK!"),
        Commands::Codes(args) => report_ok(cmd::codes(&args.options()), "OK!"),
        Commands::ListPatterns => handle_list_patterns(),
    }
}
