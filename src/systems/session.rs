//! Reveal session stepping system.
//!
//! Each frame, [`reveal_session_system`] advances every running
//! [`RevealSession`](crate::components::session::RevealSession):
//!
//! 1. On a session's first tick it unlocks the tile slots in its movement
//!    set. A `show_grid` call locks the whole grid up front, so if another
//!    session is still running, that lock and this unlock race on the shared
//!    flag. Documented limitation, see [`crate::animator`].
//! 2. It accumulates the frame delta and, for every full delay slot, gives
//!    the next entry its turn: the entry's current position plus the
//!    session's vertical offset becomes the target of a fresh
//!    [`MoveTo`](crate::components::moveto::MoveTo). The session does not
//!    wait for that travel to finish, so neighbors overlap in flight.
//!    A despawned entry is skipped but still consumes its delay slot.
//! 3. Once every entry has had its turn the session entity despawns. There
//!    is no cancellation path; exhaustion is the only way out.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::moveto::MoveTo;
use crate::components::sceneposition::ScenePosition;
use crate::components::session::RevealSession;
use crate::components::tileslot::TileSlot;
use crate::resources::worldtime::WorldTime;

/// Step every running reveal/hide session by one frame.
pub fn reveal_session_system(
    world_time: Res<WorldTime>,
    mut sessions: Query<(Entity, &mut RevealSession)>,
    positions: Query<&ScenePosition>,
    mut slots: Query<&mut TileSlot>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (session_entity, mut session) in sessions.iter_mut() {
        if !session.started {
            session.started = true;
            for index in 0..session.entries.len() {
                let entry = session.entries[index];
                if let Ok(mut slot) = slots.get_mut(entry) {
                    slot.set_interactable(false);
                }
            }
        }

        session.wait += dt;
        while session.next < session.entries.len() && session.wait >= session.delay {
            session.wait -= session.delay;
            let entry = session.entries[session.next];
            session.next += 1;

            // A dead entry keeps its delay slot so later entries stay on schedule
            let Ok(position) = positions.get(entry) else {
                debug!("reveal session skipping despawned entry {:?}", entry);
                continue;
            };
            let target = position.pos + Vec3::new(0.0, session.y_offset, 0.0);
            commands
                .entity(entry)
                .try_insert(MoveTo::new(position.pos, target, session.move_duration));
        }

        if session.next >= session.entries.len() {
            commands.entity(session_entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::time::update_world_time;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world
    }

    fn tick(world: &mut World, dt: f32) {
        update_world_time(world, dt);
        let mut schedule = Schedule::default();
        schedule.add_systems(reveal_session_system);
        schedule.run(world);
    }

    fn spawn_movable(world: &mut World, y: f32) -> Entity {
        world.spawn(ScenePosition::new(0.0, y, 0.0)).id()
    }

    #[test]
    fn test_entries_start_one_delay_apart() {
        let mut world = make_world();
        let a = spawn_movable(&mut world, 0.0);
        let b = spawn_movable(&mut world, 0.0);
        world.spawn(RevealSession::new(vec![a, b], 5.0, 0.1, 0.1));

        tick(&mut world, 0.1);
        assert!(world.get::<MoveTo>(a).is_some());
        assert!(world.get::<MoveTo>(b).is_none());

        tick(&mut world, 0.1);
        assert!(world.get::<MoveTo>(b).is_some());
    }

    #[test]
    fn test_target_is_current_position_plus_offset() {
        let mut world = make_world();
        let a = spawn_movable(&mut world, 2.0);
        world.spawn(RevealSession::new(vec![a], -5.0, 0.1, 0.1));

        tick(&mut world, 0.1);
        let mv = world.get::<MoveTo>(a).unwrap();
        assert_eq!(mv.from.y, 2.0);
        assert_eq!(mv.to.y, -3.0);
    }

    #[test]
    fn test_session_despawns_after_last_entry() {
        let mut world = make_world();
        let a = spawn_movable(&mut world, 0.0);
        let session = world.spawn(RevealSession::new(vec![a], 5.0, 0.1, 0.1)).id();

        tick(&mut world, 0.1);
        assert!(world.get::<RevealSession>(session).is_none());
    }

    #[test]
    fn test_dead_entry_consumes_its_delay_slot() {
        let mut world = make_world();
        let a = spawn_movable(&mut world, 0.0);
        let b = spawn_movable(&mut world, 0.0);
        let c = spawn_movable(&mut world, 0.0);
        world.spawn(RevealSession::new(vec![a, b, c], 5.0, 0.1, 0.1));
        world.despawn(b);

        tick(&mut world, 0.1);
        assert!(world.get::<MoveTo>(a).is_some());
        tick(&mut world, 0.1);
        // b's slot elapsed with no movement; c has not started early
        assert!(world.get::<MoveTo>(c).is_none());
        tick(&mut world, 0.1);
        assert!(world.get::<MoveTo>(c).is_some());
    }

    #[test]
    fn test_first_tick_unlocks_tile_slot_entries() {
        let mut world = make_world();
        let mut slot = TileSlot::new(0, 0);
        slot.set_interactable(true);
        let a = world.spawn((ScenePosition::new(0.0, 0.0, 0.0), slot)).id();
        world.spawn(RevealSession::new(vec![a], 5.0, 0.1, 0.1));

        tick(&mut world, 0.0);
        assert!(!world.get::<TileSlot>(a).unwrap().is_locked());
    }

    #[test]
    fn test_large_frame_delta_starts_multiple_entries() {
        let mut world = make_world();
        let a = spawn_movable(&mut world, 0.0);
        let b = spawn_movable(&mut world, 0.0);
        let c = spawn_movable(&mut world, 0.0);
        world.spawn(RevealSession::new(vec![a, b, c], 5.0, 0.1, 0.1));

        tick(&mut world, 0.25);
        assert!(world.get::<MoveTo>(a).is_some());
        assert!(world.get::<MoveTo>(b).is_some());
        assert!(world.get::<MoveTo>(c).is_none());
    }
}
