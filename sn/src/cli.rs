//! CLI argument parsing for secretnumber

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sn")]
#[command(author, version, about = "Guess the secret number, never the same one twice", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Upper bound of the secret number range (overrides config)
    #[arg(short, long)]
    pub maximum: Option<u32>,
}
