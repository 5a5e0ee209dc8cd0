//! VowelCipher - vowel substitution
//!
//! Lowercase vowels become fixed tokens (`e` → `enter`, `i` → `imes`,
//! `a` → `ai`, `o` → `ober`, `u` → `ufat`) and back. There is no key; this
//! is a word game, not cryptography. Only [`Scheme::SinglePass`] undoes
//! `encrypt` exactly; the default chained rule can fold decoded vowels into
//! new tokens.
//!
//! # Example
//!
//! ```
//! use vowelcipher::{Scheme, decrypt, encrypt};
//!
//! let secret = encrypt("gato");
//! assert_eq!(secret, "gaitober");
//! assert_eq!(decrypt(&secret, Scheme::SinglePass), "gato");
//! ```

pub mod app;
pub mod cipher;
pub mod cli;
pub mod config;

pub use app::{CipherApp, CopyOutcome};
pub use cipher::{Scheme, decrypt, encrypt, filter_input};
pub use config::Config;
