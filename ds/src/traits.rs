//! DisplaySurface trait definition

use crate::error::SurfaceError;

/// Presentation layer the game and cipher report to and read from
///
/// Regions, fields and controls are addressed by name. Unknown names are not
/// an error: reading an unknown field yields an empty string, writing creates it.
pub trait DisplaySurface {
    /// Replace the visible text of a named region
    fn set_text(&mut self, region: &str, text: &str);

    /// Current text typed into a named input field
    fn read_input_value(&self, field: &str) -> String;

    /// Overwrite the contents of a named input field
    fn set_input_value(&mut self, field: &str, value: &str);

    /// Enable or disable a named control
    fn set_disabled(&mut self, control: &str, disabled: bool);

    /// Best-effort copy to the system clipboard
    fn set_clipboard(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Clear a named input field
    fn clear_input(&mut self, field: &str) {
        self.set_input_value(field, "");
    }
}
