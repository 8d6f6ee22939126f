use ratatui::style::Color;
use tracing::{debug, info};

use crate::app::Model;
use crate::demo::TickContext;
use crate::editor::KeyIntent;

/// Colors cycled through with Ctrl+F.
pub const FOREGROUND_PALETTE: [Color; 8] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::White,
];

/// Colors cycled through with Ctrl+B. `Reset` leaves unlit segments dark.
pub const BACKGROUND_PALETTE: [Color; 4] = [
    Color::Reset,
    Color::DarkGray,
    Color::Rgb(0x30, 0x00, 0x00),
    Color::Rgb(0x00, 0x20, 0x00),
];

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance the clock and run due timers
    Tick(TickContext),
    /// Key for the focused matrix
    Key(KeyIntent),
    /// Move focus to the next matrix
    FocusNext,
    /// Move focus to the previous matrix
    FocusPrev,
    /// Terminal gained or lost focus
    HostFocus(bool),
    /// Stop the focused matrix
    StopFocused,
    /// Next foreground color for the focused matrix
    CycleForeground,
    /// Next background color for the focused matrix
    CycleBackground,
    /// Terminal was resized
    Resize,
    /// Quit the application
    Quit,
}

/// Apply one message to the model.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Tick(ctx) => {
            model.now_ms = ctx.now_ms;
            if model.registry.poll(&ctx) {
                model.dirty = true;
            }
        }
        Message::Key(intent) => {
            let now_ms = model.now_ms;
            if let Some(animation) = model.focused_animation_mut()
                && animation.handle_key(intent, now_ms)
            {
                model.dirty = true;
            }
        }
        Message::FocusNext => {
            let next = model.neighbour(true);
            model.focus(next);
        }
        Message::FocusPrev => {
            let prev = model.neighbour(false);
            model.focus(prev);
        }
        Message::HostFocus(focused) => {
            model.host_focused = focused;
            let now_ms = model.now_ms;
            if let Some(animation) = model.focused_animation_mut() {
                animation.set_focused(focused, now_ms);
            }
            model.dirty = true;
        }
        Message::StopFocused => {
            if let Some(id) = model.focused {
                let next = model.neighbour(true).filter(|next| *next != id);
                model.registry.stop(id);
                model.focused = None;
                model.focus(next);
            }
            if model.registry.is_empty() {
                info!("no matrices left, quitting");
                model.should_quit = true;
            }
        }
        Message::CycleForeground => {
            if let Some(animation) = model.focused_animation_mut() {
                let grid = animation.grid_mut();
                let color = next_color(&FOREGROUND_PALETTE, grid.foreground());
                debug!(?color, "foreground");
                grid.set_foreground(color);
                model.dirty = true;
            }
        }
        Message::CycleBackground => {
            if let Some(animation) = model.focused_animation_mut() {
                let grid = animation.grid_mut();
                let color = next_color(&BACKGROUND_PALETTE, grid.background());
                debug!(?color, "background");
                grid.set_background(color);
                model.dirty = true;
            }
        }
        Message::Resize => model.dirty = true,
        Message::Quit => model.should_quit = true,
    }
    model
}

/// The palette entry after `current`, or the first one if it is not listed.
pub fn next_color(palette: &[Color], current: Color) -> Color {
    let index = palette
        .iter()
        .position(|color| *color == current)
        .map_or(0, |index| (index + 1) % palette.len());
    palette.get(index).copied().unwrap_or(current)
}
