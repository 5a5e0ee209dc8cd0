//! Vowel substitution
//!
//! Each lowercase vowel maps to a fixed token. Nothing else is touched,
//! uppercase vowels included. This is a text game, not encryption.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Vowel to token table, in the order the passes run
pub const SUBSTITUTIONS: [(char, &str); 5] = [('e', "enter"), ('i', "imes"), ('a', "ai"), ('o', "ober"), ('u', "ufat")];

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("disallowed-character pattern is valid"));

/// How `decrypt` undoes the substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// One global replace per token, in table order; not always an inverse of `encrypt`
    #[default]
    Chained,
    /// One left-to-right scan matching a token at each position
    SinglePass,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chained => write!(f, "chained"),
            Self::SinglePass => write!(f, "single-pass"),
        }
    }
}

fn token_for(c: char) -> Option<&'static str> {
    SUBSTITUTIONS.iter().find(|(vowel, _)| *vowel == c).map(|(_, token)| *token)
}

/// Replace every lowercase vowel with its token
///
/// A single character pass gives the same result as running one global
/// replace per vowel in table order: each token only contains vowels whose
/// pass has already run.
pub fn encrypt(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match token_for(c) {
            Some(token) => out.push_str(token),
            None => out.push(c),
        }
    }
    out
}

/// Replace tokens with their vowels
pub fn decrypt(text: &str, scheme: Scheme) -> String {
    match scheme {
        Scheme::Chained => decrypt_chained(text),
        Scheme::SinglePass => decrypt_single_pass(text),
    }
}

fn decrypt_chained(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (vowel, token)| acc.replace(*token, &vowel.to_string()))
}

fn decrypt_single_pass(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(c) = rest.chars().next() {
        for (vowel, token) in SUBSTITUTIONS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push(vowel);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Whether the text only holds ASCII letters, digits and whitespace
pub fn is_allowed(text: &str) -> bool {
    !DISALLOWED.is_match(text)
}

/// Drop everything except ASCII letters, digits and whitespace
pub fn filter_input(text: &str) -> Cow<'_, str> {
    DISALLOWED.replace_all(text, "")
}
