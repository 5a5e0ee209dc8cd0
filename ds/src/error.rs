//! Display surface error types

use thiserror::Error;

/// Errors a display surface can report back to its caller
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}
