//! Rectangular tile grid builder.
//!
//! [`TileGrid`] owns the tile entities of one rectangular grid. It is a plain
//! struct constructed by the host and passed explicitly to whoever needs it;
//! tile entities live in the `World`, the grid tracks their handles in build
//! order.
//!
//! Navigation surface maintenance after grid edits is delegated through the
//! [`NavSurface`] seam; baking itself is external.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::sceneposition::ScenePosition;
use crate::components::tileslot::TileSlot;
use crate::components::visible::Visible;

/// Seam to an external navigation surface rebuilt after grid edits.
pub trait NavSurface {
    /// Drop the currently baked navigation data.
    fn invalidate_data(&mut self);
    /// Re-bake the navigation surface over the current grid.
    fn rebuild(&mut self);
}

/// Default surface for hosts without navigation. Does nothing.
pub struct NullNavSurface;

impl NavSurface for NullNavSurface {
    fn invalidate_data(&mut self) {}
    fn rebuild(&mut self) {}
}

/// Builder and owner of one rectangular grid of tile slots.
pub struct TileGrid {
    length: i32,
    width: i32,
    prefab: String,
    tiles: Vec<Entity>,
    had_first_load: bool,
    nav: Box<dyn NavSurface>,
}

impl TileGrid {
    pub fn new(length: i32, width: i32, prefab: impl Into<String>) -> Self {
        TileGrid {
            length,
            width,
            prefab: prefab.into(),
            tiles: Vec::new(),
            had_first_load: false,
            nav: Box::new(NullNavSurface),
        }
    }

    /// Attach a navigation surface to notify after grid edits.
    pub fn with_nav_surface(mut self, nav: Box<dyn NavSurface>) -> Self {
        self.nav = nav;
        self
    }

    /// One-shot first-load latch.
    ///
    /// Returns `true` on the first call after construction and `false` on
    /// every call after that.
    pub fn consume_first_load(&mut self) -> bool {
        if !self.had_first_load {
            self.had_first_load = true;
            return true;
        }
        false
    }

    /// Build `length × width` tiles at integer coordinates `(x, 0, z)`.
    ///
    /// Any previously tracked tiles are cleared first so cells are never
    /// stacked. Non-positive dimensions degrade to an empty grid.
    pub fn build(&mut self, world: &mut World) {
        // Make sure tiles are never created on top of existing ones
        self.clear(world);

        if self.length <= 0 || self.width <= 0 {
            warn!(
                "grid dimensions {}x{} are not buildable, leaving grid empty",
                self.length, self.width
            );
            return;
        }

        for x in 0..self.length {
            for z in 0..self.width {
                self.create_tile(world, x, z);
            }
        }
        debug!("built {} tiles ({}x{})", self.tiles.len(), self.length, self.width);
    }

    fn create_tile(&mut self, world: &mut World, x: i32, z: i32) {
        let mut slot = TileSlot::new(x, z);
        slot.turn_into_build_slot(self.prefab.clone());
        let tile = world
            .spawn((
                ScenePosition::new(x as f32, 0.0, z as f32),
                slot,
                Visible(true),
            ))
            .id();
        self.tiles.push(tile);
    }

    /// Despawn every tracked tile and empty the tracked list.
    ///
    /// Idempotent; tiles already gone from the world are silently dropped.
    pub fn clear(&mut self, world: &mut World) {
        for tile in self.tiles.drain(..) {
            if let Ok(entity) = world.get_entity_mut(tile) {
                entity.despawn();
            }
        }
    }

    /// Broadcast the interactability lock to every tracked tile.
    pub fn set_all_interactable(&self, world: &mut World, locked: bool) {
        for &tile in &self.tiles {
            if let Some(mut slot) = world.get_mut::<TileSlot>(tile) {
                slot.set_interactable(locked);
            }
        }
    }

    /// Tracked tile entities in build order.
    pub fn tiles(&self) -> &[Entity] {
        &self.tiles
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Invalidate the external navigation surface after a clear.
    pub fn clear_nav_data(&mut self) {
        self.nav.invalidate_data();
    }

    /// Re-bake the external navigation surface after a build.
    pub fn rebuild_nav(&mut self) {
        self.nav.rebuild();
    }
}
