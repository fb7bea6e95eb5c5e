//! Render module: Everything that turns editor state into terminal bytes.
//!
//! This module contains:
//! - [`OutputBuffer`]: Accumulates one frame for a single write
//! - [`StatusBar`]: The inverse-video status line
//! - [`draw_frame`]: The full-frame encoder with color runs

mod frame;
mod output;
mod status_bar;

pub use frame::{draw_frame, welcome_banner, Frame};
pub use output::OutputBuffer;
pub use status_bar::StatusBar;
