//! High-level stage setup.
//!
//! Wires the grid builder, the animator and the scene layout together at
//! startup. The host owns all three; nothing here is a singleton.

use bevy_ecs::prelude::*;
use log::info;

use crate::animator::Animator;
use crate::components::sceneposition::ScenePosition;
use crate::components::scenery::{EnemyPortal, PlayerCastle};
use crate::components::visible::Visible;
use crate::grid::TileGrid;
use crate::resources::scenelayout::SceneLayoutData;

/// Startup context answered by the host.
pub struct GameContext {
    test_level: bool,
}

impl GameContext {
    pub fn new(test_level: bool) -> Self {
        GameContext { test_level }
    }

    /// When true, the initial scene collection and reveal are skipped.
    pub fn is_testing_level(&self) -> bool {
        self.test_level
    }
}

/// Spawn the auxiliary scenery entities described by `layout`.
pub fn spawn_scenery(world: &mut World, layout: &SceneLayoutData) {
    for &pos in &layout.portals {
        world.spawn((ScenePosition { pos }, EnemyPortal, Visible(true)));
    }
    for &pos in &layout.castles {
        world.spawn((ScenePosition { pos }, PlayerCastle, Visible(true)));
    }
}

/// Build the stage and, unless level-testing, start the opening reveal.
pub fn setup(
    world: &mut World,
    grid: &mut TileGrid,
    animator: &mut Animator,
    context: &GameContext,
    layout: &SceneLayoutData,
) {
    grid.build(world);
    grid.rebuild_nav();
    spawn_scenery(world, layout);

    if context.is_testing_level() {
        info!("level-testing mode, skipping opening reveal");
        return;
    }

    animator.collect_scene_objects(world, grid);
    animator.show_grid(world, grid, true);
}
