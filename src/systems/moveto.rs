//! Timed movement system.
//!
//! Advances every [`MoveTo`](crate::components::moveto::MoveTo) once per
//! frame. Each tick writes `lerp(from, to, elapsed/duration)` into the
//! entity's [`ScenePosition`](crate::components::sceneposition::ScenePosition)
//! and then accumulates the frame delta, so a movement started this frame
//! still renders at its start position before traveling. When `elapsed`
//! reaches `duration` (or the duration is non-positive) the position snaps
//! exactly to `to` and the component is removed.
//!
//! An entity despawned mid-travel simply drops out of the query; the
//! movement ends without error.

use bevy_ecs::prelude::*;

use crate::components::moveto::MoveTo;
use crate::components::sceneposition::ScenePosition;
use crate::resources::worldtime::WorldTime;

/// Move entities toward their `MoveTo` target, snapping on completion.
pub fn move_to_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut ScenePosition, &mut MoveTo)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut position, mut movement) in query.iter_mut() {
        if movement.duration <= 0.0 || movement.elapsed >= movement.duration {
            position.pos = movement.to;
            commands.entity(entity).remove::<MoveTo>();
            continue;
        }
        let t = (movement.elapsed / movement.duration).clamp(0.0, 1.0);
        position.pos = movement.from.lerp(movement.to, t);
        movement.elapsed += dt;
    }
}
