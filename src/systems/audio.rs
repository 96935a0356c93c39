//! Audio thread and the systems that bridge it with the ECS world.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the fx registry, and
//!   processes [`AudioCmd`](crate::events::audio::AudioCmd) messages, emitting
//!   [`AudioMessage`](crate::events::audio::AudioMessage) responses. The
//!   playback backend is external; this thread keeps the registry and the
//!   playback log.
//! - [`forward_audio_cmds`] drains ECS command messages into the thread's
//!   channel each frame.
//! - [`poll_audio_messages`] non-blockingly drains the thread's responses
//!   into the ECS message queue.
//!
//! The thread must be created once via
//! [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::{
    prelude::{MessageReader, MessageWriter, Res},
    system::ResMut,
};
use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};
use rustc_hash::FxHashMap;

/// Drain any pending messages from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
///
/// Non-blocking; intended to run each frame on the main thread.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// The [`Messages`] API requires calling `update()` once per frame to make
/// messages written this frame visible to readers. Run this after
/// [`poll_audio_messages`] in your schedule.
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread via the bridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`] so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Owns the fx registry for its whole lifetime, reacts to [`AudioCmd`] inputs
/// and emits [`AudioMessage`] outputs. Blocks on the command channel until it
/// receives [`AudioCmd::Shutdown`] or every sender is dropped.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let mut fx: FxHashMap<String, String> = FxHashMap::default();

    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            AudioCmd::LoadFx { id, path } => {
                info!("[audio] loaded fx id='{}' path='{}'", id, path);
                fx.insert(id.clone(), path);
                let _ = tx_msg.send(AudioMessage::FxLoaded { id });
            }
            AudioCmd::PlayFx { id } => {
                if fx.contains_key(&id) {
                    info!("[audio] sound was played: '{}'", id);
                    let _ = tx_msg.send(AudioMessage::FxPlayed { id });
                } else {
                    warn!("[audio] play requested for unloaded fx '{}'", id);
                    let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                        id,
                        error: "fx not loaded".to_string(),
                    });
                }
            }
            AudioCmd::UnloadAllFx => {
                fx.clear();
                let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
            }
            AudioCmd::Shutdown => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    fn spawn_thread() -> (
        Sender<AudioCmd>,
        Receiver<AudioMessage>,
        std::thread::JoinHandle<()>,
    ) {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
        (tx_cmd, rx_msg, handle)
    }

    #[test]
    fn test_load_then_play_acknowledges() {
        let (tx_cmd, rx_msg, handle) = spawn_thread();
        tx_cmd
            .send(AudioCmd::LoadFx {
                id: "grid_rise".into(),
                path: "assets/sfx/grid_rise.ogg".into(),
            })
            .unwrap();
        tx_cmd.send(AudioCmd::PlayFx { id: "grid_rise".into() }).unwrap();

        let loaded = rx_msg.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(loaded, AudioMessage::FxLoaded { ref id } if id == "grid_rise"));
        let played = rx_msg.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(played, AudioMessage::FxPlayed { ref id } if id == "grid_rise"));

        tx_cmd.send(AudioCmd::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_play_unloaded_fx_reports_failure() {
        let (tx_cmd, rx_msg, handle) = spawn_thread();
        tx_cmd.send(AudioCmd::PlayFx { id: "missing".into() }).unwrap();

        let msg = rx_msg.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(msg, AudioMessage::FxLoadFailed { ref id, .. } if id == "missing"));

        drop(tx_cmd); // closing the channel also stops the thread
        handle.join().unwrap();
    }
}
