//! Grid staging library.
//!
//! Builds a rectangular grid of tile slots and orchestrates the timed,
//! sequential reveal/hide animation of that grid together with auxiliary
//! scene entities. The ECS world holds the scene; the host owns the
//! [`grid::TileGrid`] and [`animator::Animator`] services and drives the
//! frame loop.

pub mod animator;
pub mod components;
pub mod events;
pub mod game;
pub mod grid;
pub mod resources;
pub mod systems;
