//! Application trait and lifecycle management

use crate::core::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::scene::SceneError;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine's frame loop.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame. Build the scene here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `elapsed` - Seconds since the loop started, sampled once per frame
    fn update(&mut self, engine: &mut Engine, elapsed: f32) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once after the last frame.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene could not be built
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
