//! Timed movement component.
//!
//! A [`MoveTo`] animates an entity's
//! [`ScenePosition`](super::sceneposition::ScenePosition) linearly from
//! `from` to `to` over `duration` seconds. The update system is
//! [`move_to_system`](crate::systems::moveto::move_to_system); it snaps the
//! position exactly to `to` on completion and removes the component. If the
//! carrying entity is despawned mid-travel the movement simply ends with it.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Linear position interpolation toward a fixed target.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoveTo {
    /// Position captured when the movement started.
    pub from: Vec3,
    /// Final resting position.
    pub to: Vec3,
    /// Travel time in seconds.
    pub duration: f32,
    /// Time elapsed since the movement started.
    pub elapsed: f32,
}

impl MoveTo {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        MoveTo {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }
}
