//! Platform front-ends
//!
//! Each front-end provides the display contract (`FrameBufferDevice` plus
//! `ScoreOverlay`) and turns its own input events into `Command`s:
//! - `headless`: in-memory surfaces, no input
//! - `terminal`: crossterm alternate screen with half-block pixels

pub mod headless;
pub mod terminal;

pub use headless::HeadlessDisplay;
pub use terminal::{InputBatch, TerminalDisplay};
