//! Systems advancing the simulation.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (poll/forward message queues)
//! - [`moveto`] – advance timed linear movements toward their targets
//! - [`session`] – step running reveal/hide sessions on their delay schedule
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod moveto;
pub mod session;
pub mod time;
