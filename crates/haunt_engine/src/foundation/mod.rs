//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and operations
//! - Hex colors for scene materials and lights
//! - Time management (scene clock and frame timing)
//! - Logging bootstrap

pub mod math;
pub mod color;
pub mod time;
pub mod logging;
