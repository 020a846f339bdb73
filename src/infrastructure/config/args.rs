use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. Anything set here overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "noobank",
    version,
    about = "A mobile-style banking mockup for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Start with financial values visible.
    #[arg(long)]
    pub show_values: bool,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
