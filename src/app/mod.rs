//! Terminal host and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{BACKGROUND_PALETTE, FOREGROUND_PALETTE, Message, next_color, update};

use crate::demo::DemoOptions;

/// Owns the startup configuration and runs the event loop.
pub struct App {
    demos: Vec<DemoOptions>,
}

impl App {
    /// Create an application showing the given matrices, in order.
    pub const fn new(demos: Vec<DemoOptions>) -> Self {
        Self { demos }
    }

    /// Add one more matrix.
    pub fn with_demo(mut self, options: DemoOptions) -> Self {
        self.demos.push(options);
        self
    }

    pub fn demos(&self) -> &[DemoOptions] {
        &self.demos
    }
}

#[cfg(test)]
mod tests;
