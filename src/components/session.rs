//! Reveal session component.
//!
//! One [`RevealSession`] is the explicit state of a single sequential
//! reveal/hide run over a movement set. It lives on its own entity and is
//! advanced once per frame by
//! [`reveal_session_system`](crate::systems::session::reveal_session_system)
//! until every entry has been given its turn, at which point the session
//! entity is despawned.
//!
//! The movement set is a transient view: entries may be despawned between
//! assembly and their turn. A dead entry is skipped but still consumes its
//! delay slot, so later entries keep their schedule.
//!
//! Nothing serializes sessions. Several may run at once over overlapping
//! entries; the last writer wins on the shared positions.

use bevy_ecs::prelude::{Component, Entity};

/// State of one running sequential reveal/hide animation.
#[derive(Component, Clone, Debug)]
pub struct RevealSession {
    /// Ordered movement set this session walks through.
    pub entries: Vec<Entity>,
    /// Index of the next entry to start.
    pub next: usize,
    /// Time accumulated toward the next delay slot.
    pub wait: f32,
    /// Whether the first-tick preamble (unlocking tile slots) has run.
    pub started: bool,
    /// Signed vertical travel applied to each entry (+reveal / -hide).
    pub y_offset: f32,
    /// Travel duration handed to each started movement.
    pub move_duration: f32,
    /// Fixed delay between consecutive entry starts.
    pub delay: f32,
}

impl RevealSession {
    pub fn new(entries: Vec<Entity>, y_offset: f32, move_duration: f32, delay: f32) -> Self {
        RevealSession {
            entries,
            next: 0,
            wait: 0.0,
            started: false,
            y_offset,
            move_duration,
            delay,
        }
    }

    /// Number of entries that have not yet been given their turn.
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.next)
    }
}
