//! Marker components for auxiliary scene entities.
//!
//! Portals and castles are owned by external game logic; the sequencer only
//! discovers them by marker and moves their [`ScenePosition`](super::sceneposition::ScenePosition)
//! together with the grid tiles.

use bevy_ecs::prelude::Component;

/// Marks an enemy spawn portal placed in the scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct EnemyPortal;

/// Marks the player castle placed in the scene.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerCastle;
