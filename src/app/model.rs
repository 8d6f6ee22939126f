use tracing::debug;

use crate::demo::{Animation, DemoOptions, TickContext, build};
use crate::registry::{AnimationId, AnimationRegistry};

/// The complete application state.
///
/// All state lives here; animations and their timers are owned through the
/// registry.
#[derive(Debug)]
pub struct Model {
    pub registry: AnimationRegistry,
    /// Matrix receiving key intents.
    pub focused: Option<AnimationId>,
    /// Whether the terminal window itself has focus.
    pub host_focused: bool,
    /// Milliseconds since the host started, as of the last tick.
    pub now_ms: u64,
    pub should_quit: bool,
    /// Something visible changed since the last frame.
    pub dirty: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            registry: AnimationRegistry::new(),
            focused: None,
            host_focused: true,
            now_ms: 0,
            should_quit: false,
            dirty: true,
        }
    }
}

impl Model {
    /// Start every configured demo and focus the first one.
    pub fn with_demos(demos: &[DemoOptions], ctx: &TickContext) -> Self {
        let mut model = Self {
            now_ms: ctx.now_ms,
            ..Self::default()
        };
        for options in demos {
            model.registry.start(build(options), ctx);
        }
        let first = model.registry.ids().first().copied();
        model.focus(first);
        model
    }

    pub fn focused_animation(&self) -> Option<&(dyn Animation + 'static)> {
        self.focused.and_then(|id| self.registry.get(id))
    }

    pub fn focused_animation_mut(&mut self) -> Option<&mut (dyn Animation + 'static)> {
        self.focused.and_then(|id| self.registry.get_mut(id))
    }

    /// Move focus to `target`, blurring the previous matrix.
    pub fn focus(&mut self, target: Option<AnimationId>) {
        let now_ms = self.now_ms;
        if let Some(previous) = self.focused_animation_mut() {
            previous.set_focused(false, now_ms);
        }
        self.focused = target;
        let host_focused = self.host_focused;
        if host_focused && let Some(next) = self.focused_animation_mut() {
            next.set_focused(true, now_ms);
        }
        debug!(focused = ?self.focused, "focus changed");
        self.dirty = true;
    }

    /// The id after (or before) the focused one, wrapping around.
    pub fn neighbour(&self, forward: bool) -> Option<AnimationId> {
        let ids = self.registry.ids();
        if ids.is_empty() {
            return None;
        }
        let current = self
            .focused
            .and_then(|id| ids.iter().position(|candidate| *candidate == id));
        let index = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % ids.len(),
            (Some(i), false) => (i + ids.len() - 1) % ids.len(),
        };
        ids.get(index).copied()
    }

    /// Status text for the focused matrix.
    pub fn status_text(&self) -> String {
        match (self.focused, self.focused_animation()) {
            (Some(id), Some(animation)) => format!("{id} {}", animation.status()),
            _ => "no matrix".to_string(),
        }
    }
}
