//! ECS resources and host-owned configuration.
//!
//! Overview:
//! - `audio` – bridge and channels for the background audio thread
//! - `scenelayout` – JSON description of auxiliary scenery placement
//! - `stageconfig` – grid dimensions and animation timings from an INI file
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod scenelayout;
pub mod stageconfig;
pub mod worldtime;
