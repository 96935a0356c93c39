use bevy_ecs::prelude::Resource;

/// Simulation clock shared with every system.
///
/// The host frame loop advances it once per tick through
/// [`update_world_time`](crate::systems::time::update_world_time); systems
/// read `delta` and never touch wall-clock time themselves.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds covered by the current frame.
    pub delta: f32,
    /// Multiplier applied to incoming frame deltas.
    pub time_scale: f32,
    /// Number of frames stepped so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
