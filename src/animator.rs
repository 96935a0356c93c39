//! Grid reveal/hide sequencer.
//!
//! [`Animator`] is the service that stages a grid into or out of the scene.
//! The host constructs exactly one and passes it by reference to whoever
//! needs it; it holds timing configuration and the handle of the most
//! recently started session, nothing more. The actual work happens in the
//! world: each `show_grid` call spawns a
//! [`RevealSession`](crate::components::session::RevealSession) entity which
//! [`reveal_session_system`](crate::systems::session::reveal_session_system)
//! steps frame by frame, and each scheduled entry travels under an
//! independent [`MoveTo`](crate::components::moveto::MoveTo).
//!
//! Overlap is allowed: a second `show_grid` before the first session
//! finishes starts a second session, and both keep running over the shared
//! positions. [`Animator::is_moving`] only answers for the latest session.
//! Known sharp edge, kept deliberately.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::moveto::MoveTo;
use crate::components::sceneposition::ScenePosition;
use crate::components::scenery::{EnemyPortal, PlayerCastle};
use crate::components::session::RevealSession;
use crate::components::visible::Visible;
use crate::grid::TileGrid;
use crate::resources::stageconfig::StageConfig;

const DEFAULT_MOVE_DURATION: f32 = 0.1;
const DEFAULT_BUILD_SLOT_Y_OFFSET: f32 = 0.25;
const DEFAULT_TILE_MOVE_DURATION: f32 = 0.1;
const DEFAULT_TILE_DELAY: f32 = 0.1;
const DEFAULT_MOVE_Y_OFFSET: f32 = 5.0;

/// Sequencer driving the timed reveal/hide animation of a tile grid.
pub struct Animator {
    default_move_duration: f32,
    build_slot_y_offset: f32,
    tile_move_duration: f32,
    tile_delay: f32,
    move_y_offset: f32,
    current_session: Option<Entity>,
    scene_objects: Vec<Entity>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Animator {
            default_move_duration: DEFAULT_MOVE_DURATION,
            build_slot_y_offset: DEFAULT_BUILD_SLOT_Y_OFFSET,
            tile_move_duration: DEFAULT_TILE_MOVE_DURATION,
            tile_delay: DEFAULT_TILE_DELAY,
            move_y_offset: DEFAULT_MOVE_Y_OFFSET,
            current_session: None,
            scene_objects: Vec::new(),
        }
    }

    pub fn from_config(config: &StageConfig) -> Self {
        Animator {
            default_move_duration: config.default_move_duration,
            build_slot_y_offset: config.build_slot_y_offset,
            tile_move_duration: config.tile_move_duration,
            tile_delay: config.tile_delay,
            move_y_offset: config.move_y_offset,
            current_session: None,
            scene_objects: Vec::new(),
        }
    }

    pub fn with_tile_delay(mut self, delay: f32) -> Self {
        self.tile_delay = delay;
        self
    }

    pub fn with_tile_move_duration(mut self, duration: f32) -> Self {
        self.tile_move_duration = duration;
        self
    }

    pub fn with_move_y_offset(mut self, offset: f32) -> Self {
        self.move_y_offset = offset;
        self
    }

    /// Start a sequential reveal (`reveal == true`) or hide of `grid`.
    ///
    /// Assembles the movement set (tiles before scenery for a reveal,
    /// scenery first for a hide), applies the one-time first-load seed
    /// displacement, locks every grid tile and spawns one new session. An
    /// empty movement set completes immediately without spawning anything.
    pub fn show_grid(&mut self, world: &mut World, grid: &mut TileGrid, reveal: bool) {
        let entries = movement_set(world, grid, reveal);

        // Seed start positions below resting height the very first time this
        // grid is shown, so the reveal travel rises into place.
        if grid.consume_first_load() {
            apply_offset(world, &entries, Vec3::new(0.0, -self.move_y_offset, 0.0));
        }

        let y_offset = if reveal {
            self.move_y_offset
        } else {
            -self.move_y_offset
        };

        grid.set_all_interactable(world, true);

        if entries.is_empty() {
            debug!("show_grid with empty movement set, nothing to sequence");
            self.current_session = None;
            return;
        }

        debug!(
            "starting {} session over {} entries",
            if reveal { "reveal" } else { "hide" },
            entries.len()
        );
        let session = world
            .spawn(RevealSession::new(
                entries,
                y_offset,
                self.tile_move_duration,
                self.tile_delay,
            ))
            .id();
        self.current_session = Some(session);
    }

    /// Start an independent timed movement of one entity toward `target`.
    ///
    /// `duration` falls back to the configured default. A missing entity is
    /// a silent no-op.
    pub fn move_entity(
        &self,
        world: &mut World,
        entity: Entity,
        target: Vec3,
        duration: Option<f32>,
    ) {
        let duration = duration.unwrap_or(self.default_move_duration);
        let Some(position) = world.get::<ScenePosition>(entity) else {
            return;
        };
        let from = position.pos;
        if let Ok(mut entity_mut) = world.get_entity_mut(entity) {
            entity_mut.insert(MoveTo::new(from, target, duration));
        }
    }

    /// Whether the most recently started session is still running.
    ///
    /// Not a mutual-exclusion flag: earlier sessions may still be in flight
    /// when this returns `false`.
    pub fn is_moving(&self, world: &World) -> bool {
        self.current_session
            .map(|session| world.get::<RevealSession>(session).is_some())
            .unwrap_or(false)
    }

    /// Handle of the most recently started session, if any was spawned.
    pub fn current_session(&self) -> Option<Entity> {
        self.current_session
    }

    /// Vertical raise used while a slot previews a build.
    pub fn build_offset(&self) -> f32 {
        self.build_slot_y_offset
    }

    /// Fallback travel duration for single-entity movements.
    pub fn travel_duration(&self) -> f32 {
        self.default_move_duration
    }

    /// Append the grid's tiles and the discovered scenery to the scene
    /// roster used by [`Animator::set_scene_objects_enabled`].
    pub fn collect_scene_objects(&mut self, world: &mut World, grid: &TileGrid) {
        self.scene_objects.extend_from_slice(grid.tiles());
        self.scene_objects.extend(collect_scenery(world));
    }

    /// Toggle the visibility flag of every collected scene object.
    pub fn set_scene_objects_enabled(&self, world: &mut World, enabled: bool) {
        for &entity in &self.scene_objects {
            if let Some(mut visible) = world.get_mut::<Visible>(entity) {
                visible.0 = enabled;
            }
        }
    }
}

/// Discover the auxiliary movable entities currently in the scene:
/// enemy portals first, then player castles.
pub fn collect_scenery(world: &mut World) -> Vec<Entity> {
    let mut found: Vec<Entity> = world
        .query_filtered::<Entity, With<EnemyPortal>>()
        .iter(world)
        .collect();
    found.extend(
        world
            .query_filtered::<Entity, With<PlayerCastle>>()
            .iter(world),
    );
    found
}

fn movement_set(world: &mut World, grid: &TileGrid, tiles_first: bool) -> Vec<Entity> {
    let scenery = collect_scenery(world);
    let mut entries = Vec::with_capacity(grid.tiles().len() + scenery.len());
    if tiles_first {
        entries.extend_from_slice(grid.tiles());
        entries.extend(scenery);
    } else {
        entries.extend(scenery);
        entries.extend_from_slice(grid.tiles());
    }
    entries
}

fn apply_offset(world: &mut World, entries: &[Entity], offset: Vec3) {
    for &entry in entries {
        if let Some(mut position) = world.get_mut::<ScenePosition>(entry) {
            position.pos += offset;
        }
    }
}
