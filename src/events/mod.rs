//! Message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread

pub mod audio;
