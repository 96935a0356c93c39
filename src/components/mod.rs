//! ECS components for scene entities.
//!
//! This module groups the component types attached to entities managed by the
//! grid builder and the reveal sequencer.
//!
//! Submodules overview:
//! - [`moveto`] – timed linear interpolation of an entity's scene position
//! - [`sceneposition`] – world-space 3D position of an entity
//! - [`scenery`] – marker components for auxiliary scene entities
//! - [`session`] – state of one running reveal/hide sequencing session
//! - [`tileslot`] – grid cell state (build slot, interactability lock)
//! - [`visible`] – scene-graph visibility flag read by an external renderer

pub mod moveto;
pub mod sceneposition;
pub mod scenery;
pub mod session;
pub mod tileslot;
pub mod visible;
