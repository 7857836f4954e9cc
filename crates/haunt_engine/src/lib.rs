//! # Haunt Engine
//!
//! Scene core for a haunted tower: a tower on a lawn, a ring of tombstones
//! that keep their distance, bushes huddled by the walls, and ghost lights
//! drifting around the graves.
//!
//! ## Features
//!
//! - **Scattered Placement**: Collision-aware prop scattering on an annulus
//! - **Ghost Animation**: Stateless per-frame drift around fixed anchors
//! - **Reproducible Scenes**: Every random draw goes through an injectable,
//!   seedable source
//! - **Configuration**: One validated config tree, loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use haunt_engine::prelude::*;
//!
//! struct Haunting {
//!     scene: Option<HauntedScene>,
//! }
//!
//! impl Application for Haunting {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         let mut rng = seeded(7);
//!         self.scene = Some(HauntedScene::build(&HauntedSceneConfig::default(), &mut rng)?);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, elapsed: f32) -> Result<(), AppError> {
//!         if let Some(scene) = self.scene.as_mut() {
//!             scene.update(elapsed);
//!         }
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default().with_max_frames(600);
//!     let mut app = Haunting { scene: None };
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;
pub mod foundation;

// Scene content
pub mod animation;
pub mod procedural;
pub mod scene;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineError,
        animation::{tick, GhostState},
        config::ConfigFormat,
        core::config::{Config, ConfigError, EngineConfig, HauntedSceneConfig},
        foundation::{
            color::Color,
            math::{Vec3, Mat4, Transform},
            time::{Clock, FrameTimer},
        },
        procedural::{
            place_scattered, AnnulusSpec, PlacedObject, PropKind, RandomSource, ScaleMargin,
            random::seeded,
        },
        scene::{Camera, Group, HauntedScene, Light, SceneError},
    };
}
