//! SecretNumber - guess the secret number, never the same one twice
//!
//! Each round draws a secret from `[1, maximum]` through a [`DrawSession`],
//! which refuses to hand out a value twice. Once every value has been used
//! the game reports exhaustion instead of drawing again.
//!
//! # Modules
//!
//! - [`draw`] - non-repeating draw session
//! - [`game`] - round flow against a display surface
//! - [`repl`] - interactive terminal session
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod draw;
mod error;
pub mod game;
pub mod repl;

pub use config::Config;
pub use draw::{Draw, DrawSession};
pub use error::{DrawError, GuessError};
pub use game::{Game, Outcome, Phase, parse_guess};
