//! Grid staging demo host.
//!
//! Runs the reveal sequencer headless over a fixed-timestep frame loop:
//!
//! 1. Load the stage INI configuration and the optional scene layout JSON
//! 2. Create the ECS world, timing resource and the audio bridge
//! 3. Build the grid, spawn scenery and start the opening reveal (skipped
//!    with `--test-level`)
//! 4. Step the update schedule for the requested number of frames,
//!    optionally starting a hide partway through with `--hide-after`
//! 5. Shut the audio thread down and report the final state
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 120
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use gridstage::animator::Animator;
use gridstage::events::audio::AudioCmd;
use gridstage::game::{self, GameContext};
use gridstage::grid::TileGrid;
use gridstage::resources::audio::{setup_audio, shutdown_audio};
use gridstage::resources::scenelayout::SceneLayoutData;
use gridstage::resources::stageconfig::StageConfig;
use gridstage::resources::worldtime::WorldTime;
use gridstage::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use gridstage::systems::moveto::move_to_system;
use gridstage::systems::session::reveal_session_system;
use gridstage::systems::time::update_world_time;

/// Grid staging demo
#[derive(Parser)]
#[command(version, about = "Tile grid reveal/hide sequencer demo")]
struct Cli {
    /// Path to the stage configuration INI file.
    #[arg(long, value_name = "PATH", default_value = "./stage.ini")]
    config: PathBuf,

    /// Path to a scene layout JSON describing portals and castles.
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Number of fixed simulation frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Fixed timestep in seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    timestep: f32,

    /// Skip scene collection and the opening reveal (level-testing mode).
    #[arg(long)]
    test_level: bool,

    /// Start hiding the grid again after this many frames.
    #[arg(long, value_name = "FRAME")]
    hide_after: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = StageConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}, using defaults");
    }

    let layout = match &cli.layout {
        Some(path) => match SceneLayoutData::load_from_file(&path.to_string_lossy()) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("failed to load scene layout: {e}, using empty layout");
                SceneLayoutData::default()
            }
        },
        None => SceneLayoutData::default(),
    };

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    setup_audio(&mut world);

    let mut grid = TileGrid::new(config.grid_length, config.grid_width, &config.tile_prefab);
    let mut animator = Animator::from_config(&config);
    let context = GameContext::new(cli.test_level);

    game::setup(&mut world, &mut grid, &mut animator, &context, &layout);

    if !cli.test_level {
        // Stinger for the opening reveal
        let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
        cmds.write(AudioCmd::LoadFx {
            id: "grid_rise".to_string(),
            path: "assets/sfx/grid_rise.ogg".to_string(),
        });
        cmds.write(AudioCmd::PlayFx {
            id: "grid_rise".to_string(),
        });
    }

    let mut update = Schedule::default();
    update.add_systems((reveal_session_system, move_to_system).chain());
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );

    for frame in 0..cli.frames {
        if cli.hide_after == Some(frame) {
            log::info!("frame {frame}: hiding grid");
            animator.show_grid(&mut world, &mut grid, false);
        }
        update_world_time(&mut world, cli.timestep);
        update.run(&mut world);
    }

    log::info!(
        "finished after {} frames, sequencer still moving: {}",
        cli.frames,
        animator.is_moving(&world)
    );
    shutdown_audio(&mut world);
}
