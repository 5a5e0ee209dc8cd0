//! In-memory display surface

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::SurfaceError;
use crate::traits::DisplaySurface;

/// Display surface that records every call in memory
///
/// Nothing is rendered. Tests inspect the recorded state through the
/// accessor methods.
#[derive(Debug, Default)]
pub struct MemorySurface {
    texts: HashMap<String, String>,
    text_log: Vec<(String, String)>,
    inputs: HashMap<String, String>,
    disabled: HashSet<String>,
    clipboard: Option<String>,
    clipboard_failure: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent clipboard copy fail with the given reason
    pub fn fail_clipboard(&mut self, reason: impl Into<String>) {
        self.clipboard_failure = Some(reason.into());
    }

    /// Current text of a region, if it was ever set
    pub fn text(&self, region: &str) -> Option<&str> {
        self.texts.get(region).map(String::as_str)
    }

    /// Every `set_text` call in order, as `(region, text)` pairs
    pub fn text_log(&self) -> &[(String, String)] {
        &self.text_log
    }

    pub fn is_disabled(&self, control: &str) -> bool {
        self.disabled.contains(control)
    }

    /// Last text successfully copied to the clipboard
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&mut self, region: &str, text: &str) {
        debug!(region, text, "MemorySurface::set_text");
        self.texts.insert(region.to_string(), text.to_string());
        self.text_log.push((region.to_string(), text.to_string()));
    }

    fn read_input_value(&self, field: &str) -> String {
        self.inputs.get(field).cloned().unwrap_or_default()
    }

    fn set_input_value(&mut self, field: &str, value: &str) {
        self.inputs.insert(field.to_string(), value.to_string());
    }

    fn set_disabled(&mut self, control: &str, disabled: bool) {
        if disabled {
            self.disabled.insert(control.to_string());
        } else {
            self.disabled.remove(control);
        }
    }

    fn set_clipboard(&mut self, text: &str) -> Result<(), SurfaceError> {
        if let Some(reason) = &self.clipboard_failure {
            return Err(SurfaceError::Clipboard(reason.clone()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_reads_empty() {
        let surface = MemorySurface::new();
        assert_eq!(surface.read_input_value("missing"), "");
    }

    #[test]
    fn test_set_text_replaces_and_logs() {
        let mut surface = MemorySurface::new();
        surface.set_text("message", "first");
        surface.set_text("message", "second");

        assert_eq!(surface.text("message"), Some("second"));
        assert_eq!(surface.text_log().len(), 2);
        assert_eq!(surface.text_log()[0], ("message".to_string(), "first".to_string()));
    }

    #[test]
    fn test_clear_input() {
        let mut surface = MemorySurface::new();
        surface.set_input_value("guess", "42");
        surface.clear_input("guess");
        assert_eq!(surface.read_input_value("guess"), "");
    }

    #[test]
    fn test_disable_toggle() {
        let mut surface = MemorySurface::new();
        surface.set_disabled("restart", true);
        assert!(surface.is_disabled("restart"));
        surface.set_disabled("restart", false);
        assert!(!surface.is_disabled("restart"));
    }

    #[test]
    fn test_clipboard_success_and_failure() {
        let mut surface = MemorySurface::new();
        surface.set_clipboard("copied").unwrap();
        assert_eq!(surface.clipboard(), Some("copied"));

        surface.fail_clipboard("denied");
        let err = surface.set_clipboard("again").unwrap_err();
        assert!(err.to_string().contains("denied"));
        assert_eq!(surface.clipboard(), Some("copied"));
    }
}
