//! DisplaySurface - presentation layer seam for the page-style front ends
//!
//! The game and cipher logic never touch a terminal directly. They talk to a
//! [`DisplaySurface`], which owns named text regions, input fields, controls
//! and the clipboard. Front ends pick an implementation:
//!
//! - [`TerminalSurface`] renders regions as coloured lines on any writer and
//!   copies through the system clipboard
//! - [`MemorySurface`] records every call, for tests and headless use
//!
//! # Example
//!
//! ```
//! use displaysurface::{DisplaySurface, MemorySurface};
//!
//! let mut surface = MemorySurface::new();
//! surface.set_input_value("guess", "7");
//! assert_eq!(surface.read_input_value("guess"), "7");
//! ```

mod error;
mod memory;
mod terminal;
mod traits;

pub use error::SurfaceError;
pub use memory::MemorySurface;
pub use terminal::{RegionStyle, TerminalSurface};
pub use traits::DisplaySurface;
