//! Per-frame animation of scene objects

pub mod ghost;

pub use ghost::{orbit_position, spawn_ghosts, tick, GhostState, GhostVisual, GHOST_ORBIT_AMPLITUDE};
