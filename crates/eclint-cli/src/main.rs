//! eclint CLI tool.
//!
//! Usage:
//! ```bash
//! eclint check [OPTIONS] [PATH]...
//! eclint list-rules
//! ```

use clap::{Args, Parser, Subcommand};
use eclint_core::ColorMode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod discovery;
mod editorconfig;

/// Every checked file is clean.
pub const EXIT_SUCCESS: u8 = 0;
/// At least one violation or per-file error.
pub const EXIT_VIOLATIONS: u8 = 1;
/// The tool itself is misconfigured.
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Checks files against their `.editorconfig` settings
#[derive(Parser)]
#[command(name = "eclint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files
    Check(CheckArgs),

    /// List available rules
    ListRules,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Files or directories to check (default: current directory)
    paths: Vec<PathBuf>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print only the number of errors per file
    #[arg(short, long)]
    summary: bool,

    /// Display every error instead of the first few per file
    #[arg(long, conflicts_with = "show_error_quantity")]
    show_all_errors: bool,

    /// Errors displayed per file before the rest is skipped
    #[arg(long)]
    show_error_quantity: Option<usize>,

    /// When to use terminal colors
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorChoice,

    /// Disable terminal colors (same as `--color never`)
    #[arg(long)]
    no_colors: bool,

    /// Prefix of settings overriding their `.editorconfig` counterparts
    /// (empty disables overrides)
    #[arg(long)]
    override_prefix: Option<String>,

    /// Only run specific rules (comma-separated names or codes)
    #[arg(long)]
    rules: Option<String>,
}

impl CheckArgs {
    fn color_mode(&self) -> ColorMode {
        if self.no_colors {
            return ColorMode::Never;
        }
        match self.color {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Terminal color selection.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colors when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Check(args) => commands::check::run(args, cli.config.as_deref()),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(EXIT_SUCCESS)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}
