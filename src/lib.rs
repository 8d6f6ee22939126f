// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. demo::DemoKind)
    clippy::module_name_repetitions
)]

//! # Segmatrix
//!
//! Animated sixteen-segment display matrices in the terminal.
//!
//! Each matrix is a grid of sixteen-segment displays driven by its own
//! timers: a clock, a marquee, a spinner, a bouncing ball, or a typewriter
//! that edits text through a fixed window.
//!
//! ## Architecture
//!
//! The terminal host uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`glyph`]: Segments and the character table
//! - [`grid`]: The segment grid and the renderer sink trait
//! - [`editor`]: Text buffer, viewport cursor and cursor blink
//! - [`demo`]: The animations
//! - [`registry`]: Running animations
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`svg`]: Static SVG export
//! - [`config`]: Rc-file and command-line defaults

pub mod app;
pub mod config;
pub mod demo;
pub mod editor;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod logging;
pub mod registry;
pub mod svg;
pub mod timer;
pub mod ui;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::demo::{Animation, DemoKind, DemoOptions, TickContext};
    pub use crate::editor::{Editor, Extent, KeyIntent, TextBuffer, ViewportCursor};
    pub use crate::grid::{RenderSink, SegmentGrid};
}
