//! Terminal display surface
//!
//! Text regions become lines on a writer (stdout or stderr in the binaries). Input
//! fields and control state live in memory because a terminal has no widgets;
//! the REPL writes what the user typed into the matching field.

use std::collections::{HashMap, HashSet};
use std::io::{Stdout, Write};

use colored::Colorize;
use tracing::{debug, warn};

use crate::error::SurfaceError;
use crate::traits::DisplaySurface;

/// How a region is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionStyle {
    #[default]
    Plain,
    Heading,
    Notice,
}

/// Display surface that prints regions to a writer
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    styles: HashMap<String, RegionStyle>,
    inputs: HashMap<String, String>,
    disabled: HashSet<String>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            styles: HashMap::new(),
            inputs: HashMap::new(),
            disabled: HashSet::new(),
        }
    }

    /// Render the given region with a style
    pub fn with_style(mut self, region: &str, style: RegionStyle) -> Self {
        self.styles.insert(region.to_string(), style);
        self
    }

    pub fn is_disabled(&self, control: &str) -> bool {
        self.disabled.contains(control)
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn set_text(&mut self, region: &str, text: &str) {
        let style = self.styles.get(region).copied().unwrap_or_default();
        let rendered = match style {
            RegionStyle::Plain => text.normal(),
            RegionStyle::Heading => text.bright_cyan().bold(),
            RegionStyle::Notice => text.yellow(),
        };
        if let Err(e) = writeln!(self.out, "{}", rendered).and_then(|_| self.out.flush()) {
            warn!(region, error = %e, "TerminalSurface::set_text: write failed");
        }
    }

    fn read_input_value(&self, field: &str) -> String {
        self.inputs.get(field).cloned().unwrap_or_default()
    }

    fn set_input_value(&mut self, field: &str, value: &str) {
        self.inputs.insert(field.to_string(), value.to_string());
    }

    fn set_disabled(&mut self, control: &str, disabled: bool) {
        debug!(control, disabled, "TerminalSurface::set_disabled");
        if disabled {
            self.disabled.insert(control.to_string());
        } else {
            self.disabled.remove(control);
        }
    }

    #[cfg(feature = "system-clipboard")]
    fn set_clipboard(&mut self, text: &str) -> Result<(), SurfaceError> {
        cli_clipboard::set_contents(text.to_string()).map_err(|e| SurfaceError::Clipboard(e.to_string()))
    }

    #[cfg(not(feature = "system-clipboard"))]
    fn set_clipboard(&mut self, _text: &str) -> Result<(), SurfaceError> {
        Err(SurfaceError::Clipboard(
            "built without the system-clipboard feature".to_string(),
        ))
    }
}
