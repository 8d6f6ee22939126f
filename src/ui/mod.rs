//! Terminal UI components.
//!
//! - [`widget`]: draws a [`SegmentGrid`](crate::grid::SegmentGrid) with box characters
//! - [`render`]: lays out every matrix plus the status bar

pub mod widget;

mod render;

pub use render::{matrix_area, render};
pub use widget::{CELL_HEIGHT, CELL_WIDTH};
