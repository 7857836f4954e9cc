//! # Core Module
//!
//! Shared configuration for every subsystem of the scene.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration tree loaded from TOML or RON
//! - **Foundation**: Low-level utilities (math, color, time, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    BushConfig,
    CameraConfig,
    Config,
    ConfigError,
    EngineConfig,
    FogConfig,
    GhostConfig,
    HauntedSceneConfig,
    LightingConfig,
    TombstoneConfig,
    TowerConfig,
};
