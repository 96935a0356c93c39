use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of a scene entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScenePosition {
    pub pos: Vec3,
}

impl ScenePosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        ScenePosition {
            pos: Vec3::new(x, y, z),
        }
    }
}
