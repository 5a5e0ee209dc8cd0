//! CLI argument parsing for vowelcipher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cipher::Scheme;

#[derive(Parser, Debug)]
#[command(name = "vc")]
#[command(author, version, about = "Swap vowels for tokens and back again", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Keep characters the input filter would strip
    #[arg(long)]
    pub no_filter: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace vowels with tokens
    Encrypt {
        /// Text to encrypt (reads stdin when omitted)
        text: Option<String>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Replace tokens with vowels
    Decrypt {
        /// Text to decrypt (reads stdin when omitted)
        text: Option<String>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Decoding rule (overrides config)
        #[arg(short, long, value_enum)]
        scheme: Option<Scheme>,
    },

    /// Show the text with disallowed characters removed
    Filter {
        /// Text to filter (reads stdin when omitted)
        text: Option<String>,
    },
}
