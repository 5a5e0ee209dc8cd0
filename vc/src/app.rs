//! Cipher actions against a display surface
//!
//! Mirrors the page buttons: typing into the input field filters it,
//! encrypt/decrypt fill the output field, copy sends the output to the
//! clipboard and reports how it went.

use displaysurface::DisplaySurface;
use tracing::{debug, info, warn};

use crate::cipher::{self, Scheme};

/// Text to transform
pub const INPUT_FIELD: &str = "input";
/// Result of the last transform
pub const OUTPUT_FIELD: &str = "output";
/// Notices for the user
pub const STATUS_REGION: &str = "status";

pub const COPIED_TEXT: &str = "Text copied to clipboard";

/// Result of a copy action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Clipboard refused; the reason was shown on the surface
    Failed(String),
}

/// Button handlers for the substitution tool
#[derive(Debug, Clone, Copy)]
pub struct CipherApp {
    scheme: Scheme,
    filter: bool,
}

impl Default for CipherApp {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            filter: true,
        }
    }
}

impl CipherApp {
    pub fn new(scheme: Scheme, filter: bool) -> Self {
        Self { scheme, filter }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Strip disallowed characters from the input field
    ///
    /// Returns true when the field was rewritten.
    pub fn on_input(&self, surface: &mut dyn DisplaySurface) -> bool {
        if !self.filter {
            return false;
        }
        let value = surface.read_input_value(INPUT_FIELD);
        if cipher::is_allowed(&value) {
            return false;
        }
        let filtered = cipher::filter_input(&value).into_owned();
        debug!(removed = value.len() - filtered.len(), "CipherApp::on_input: filtered");
        surface.set_input_value(INPUT_FIELD, &filtered);
        true
    }

    pub fn encrypt(&self, surface: &mut dyn DisplaySurface) {
        let input = surface.read_input_value(INPUT_FIELD);
        let output = cipher::encrypt(&input);
        debug!(input_len = input.len(), output_len = output.len(), "CipherApp::encrypt");
        surface.set_input_value(OUTPUT_FIELD, &output);
    }

    pub fn decrypt(&self, surface: &mut dyn DisplaySurface) {
        let input = surface.read_input_value(INPUT_FIELD);
        let output = cipher::decrypt(&input, self.scheme);
        debug!(scheme = %self.scheme, input_len = input.len(), "CipherApp::decrypt");
        surface.set_input_value(OUTPUT_FIELD, &output);
    }

    /// Copy the output field to the clipboard; never fails
    pub fn copy(&self, surface: &mut dyn DisplaySurface) -> CopyOutcome {
        let output = surface.read_input_value(OUTPUT_FIELD);
        match surface.set_clipboard(&output) {
            Ok(()) => {
                info!(len = output.len(), "CipherApp::copy: copied");
                surface.set_text(STATUS_REGION, COPIED_TEXT);
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, "CipherApp::copy: clipboard unavailable");
                let reason = e.to_string();
                surface.set_text(STATUS_REGION, &format!("Could not copy text: {}", reason));
                CopyOutcome::Failed(reason)
            }
        }
    }
}
