//! The set of running animations.
//!
//! Each animation owns its timers, so removing it from the registry drops
//! both together; nothing keeps ticking for a display that is gone.

use std::collections::BTreeMap;
use std::fmt;

use tracing::info;

use crate::demo::{Animation, TickContext};
use crate::timer::earliest;

/// Identifier of a running animation, unique for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationId(u64);

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix{}", self.0)
    }
}

#[derive(Default)]
pub struct AnimationRegistry {
    next_id: u64,
    entries: BTreeMap<AnimationId, Box<dyn Animation>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `animation` and take ownership of it.
    pub fn start(&mut self, mut animation: Box<dyn Animation>, ctx: &TickContext) -> AnimationId {
        self.next_id += 1;
        let id = AnimationId(self.next_id);
        animation.start(ctx);
        info!(%id, kind = %animation.kind(), "animation started");
        self.entries.insert(id, animation);
        id
    }

    /// Stop and drop an animation. Returns false if the id is unknown.
    pub fn stop(&mut self, id: AnimationId) -> bool {
        let removed = self.entries.remove(&id);
        if let Some(animation) = &removed {
            info!(%id, kind = %animation.kind(), "animation stopped");
        }
        removed.is_some()
    }

    pub fn get(&self, id: AnimationId) -> Option<&(dyn Animation + 'static)> {
        self.entries.get(&id).map(|animation| &**animation)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut (dyn Animation + 'static)> {
        self.entries.get_mut(&id).map(|animation| &mut **animation)
    }

    /// Ids in start order.
    pub fn ids(&self) -> Vec<AnimationId> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &(dyn Animation + 'static))> {
        self.entries
            .iter()
            .map(|(id, animation)| (*id, &**animation))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Poll every animation. Returns true if any grid changed.
    pub fn poll(&mut self, ctx: &TickContext) -> bool {
        let mut changed = false;
        for animation in self.entries.values_mut() {
            changed |= animation.poll(ctx);
        }
        changed
    }

    /// Earliest deadline across all animations.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries
            .values()
            .fold(None, |acc, animation| earliest(acc, animation.next_deadline()))
    }
}

impl fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRegistry")
            .field("next_id", &self.next_id)
            .field("running", &self.ids())
            .finish()
    }
}
