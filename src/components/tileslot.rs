//! Tile slot component.
//!
//! One [`TileSlot`] represents a single grid cell. The grid builder converts
//! every freshly spawned cell into a build slot referencing the prefab key it
//! should instantiate when the player builds on it, and both the grid builder
//! and the reveal sequencer toggle its interactability lock. The slot never
//! mutates its own lock.

use bevy_ecs::prelude::Component;

/// A single grid cell with build-slot state and an interactability lock.
#[derive(Component, Clone, Debug)]
pub struct TileSlot {
    /// Integer grid coordinate (x, z) of this cell.
    pub coord: (i32, i32),
    /// Prefab key this slot instantiates when built on; `None` until the
    /// cell has been converted into a build slot.
    pub prefab: Option<String>,
    /// When true, player interaction with this slot is rejected.
    pub locked: bool,
}

impl TileSlot {
    pub fn new(x: i32, z: i32) -> Self {
        TileSlot {
            coord: (x, z),
            prefab: None,
            locked: false,
        }
    }

    /// Convert this cell into a build slot for `prefab`.
    pub fn turn_into_build_slot(&mut self, prefab: impl Into<String>) {
        self.prefab = Some(prefab.into());
    }

    pub fn is_build_slot(&self) -> bool {
        self.prefab.is_some()
    }

    /// Set the interactability lock. `locked == true` rejects interaction.
    pub fn set_interactable(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_unlocked_and_not_a_build_slot() {
        let slot = TileSlot::new(2, 3);
        assert_eq!(slot.coord, (2, 3));
        assert!(!slot.is_build_slot());
        assert!(!slot.is_locked());
    }

    #[test]
    fn test_turn_into_build_slot_stores_prefab() {
        let mut slot = TileSlot::new(0, 0);
        slot.turn_into_build_slot("tile_basic");
        assert!(slot.is_build_slot());
        assert_eq!(slot.prefab.as_deref(), Some("tile_basic"));
    }

    #[test]
    fn test_set_interactable_toggles_lock() {
        let mut slot = TileSlot::new(0, 0);
        slot.set_interactable(true);
        assert!(slot.is_locked());
        slot.set_interactable(false);
        assert!(!slot.is_locked());
    }
}
