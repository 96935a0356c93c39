//! Integration tests for the tile grid builder.

use bevy_ecs::prelude::*;

use gridstage::components::sceneposition::ScenePosition;
use gridstage::components::tileslot::TileSlot;
use gridstage::components::visible::Visible;
use gridstage::grid::TileGrid;
use gridstage::resources::worldtime::WorldTime;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world
}

#[test]
fn build_yields_exactly_length_times_width_tiles_for_small_dims() {
    for length in 0..=3 {
        for width in 0..=3 {
            let mut world = make_world();
            let mut grid = TileGrid::new(length, width, "tile_basic");
            grid.build(&mut world);

            let expected = if length > 0 && width > 0 {
                (length * width) as usize
            } else {
                0
            };
            assert_eq!(
                grid.tiles().len(),
                expected,
                "unexpected tile count for {length}x{width}"
            );
            assert_eq!(
                world.query::<&TileSlot>().iter(&world).count(),
                expected,
                "world population mismatch for {length}x{width}"
            );
        }
    }
}

#[test]
fn build_covers_every_coordinate_exactly_once() {
    let mut world = make_world();
    let mut grid = TileGrid::new(5, 4, "tile_basic");
    grid.build(&mut world);

    let mut seen = std::collections::HashSet::new();
    for &tile in grid.tiles() {
        let slot = world.get::<TileSlot>(tile).unwrap();
        assert!(seen.insert(slot.coord));
    }
    for x in 0..5 {
        for z in 0..4 {
            assert!(seen.contains(&(x, z)), "missing coordinate ({x}, {z})");
        }
    }
}

#[test]
fn tile_order_matches_positions_row_major() {
    let mut world = make_world();
    let mut grid = TileGrid::new(2, 3, "tile_basic");
    grid.build(&mut world);

    // x outer, z inner: (0,0) (0,1) (0,2) (1,0) (1,1) (1,2)
    let coords: Vec<(i32, i32)> = grid
        .tiles()
        .iter()
        .map(|&tile| world.get::<TileSlot>(tile).unwrap().coord)
        .collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    for &tile in grid.tiles() {
        let slot = world.get::<TileSlot>(tile).unwrap();
        let pos = world.get::<ScenePosition>(tile).unwrap();
        assert_eq!(pos.pos.x, slot.coord.0 as f32);
        assert_eq!(pos.pos.y, 0.0);
        assert_eq!(pos.pos.z, slot.coord.1 as f32);
    }
}

#[test]
fn repeated_builds_never_leak_tiles() {
    let mut world = make_world();
    let mut grid = TileGrid::new(4, 4, "tile_basic");
    for _ in 0..3 {
        grid.build(&mut world);
        assert_eq!(grid.tiles().len(), 16);
        assert_eq!(world.query::<&TileSlot>().iter(&world).count(), 16);
    }
}

#[test]
fn fresh_tiles_are_visible_build_slots() {
    let mut world = make_world();
    let mut grid = TileGrid::new(2, 2, "tile_basic");
    grid.build(&mut world);

    for &tile in grid.tiles() {
        assert_eq!(world.get::<Visible>(tile), Some(&Visible(true)));
        let slot = world.get::<TileSlot>(tile).unwrap();
        assert!(slot.is_build_slot());
        assert!(!slot.is_locked());
    }
}

#[test]
fn first_load_latch_survives_rebuilds() {
    let mut world = make_world();
    let mut grid = TileGrid::new(2, 2, "tile_basic");
    grid.build(&mut world);
    assert!(grid.consume_first_load());

    // rebuilding the tiles does not reset the per-grid latch
    grid.build(&mut world);
    assert!(!grid.consume_first_load());
}
