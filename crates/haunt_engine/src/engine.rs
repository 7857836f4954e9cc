//! Core engine implementation
//!
//! A headless frame loop: sample the clock once, update the application,
//! then sleep off whatever is left of the frame budget.

use crate::application::Application;
use crate::core::config::EngineConfig;
use crate::foundation::time::{Clock, FrameTimer};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the clock and manages the main loop.
pub struct Engine {
    /// Scene clock, started when the loop starts
    clock: Clock,

    /// Frame timing
    timer: FrameTimer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Self {
        log::info!("Initializing engine...");
        Self {
            clock: Clock::start(),
            timer: FrameTimer::new(),
            config,
            running: true,
        }
    }

    /// Run the engine main loop with the given application
    ///
    /// Runs until [`Engine::quit`] is called or `max_frames` frames have
    /// been produced.
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config);

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");
        engine.clock.reset();

        while engine.should_continue() {
            engine.timer.update();
            let elapsed = engine.clock.elapsed_secs();

            // Update application
            if let Err(e) = app.update(&mut engine, elapsed) {
                app.cleanup(&mut engine);
                return Err(EngineError::ApplicationError(format!("App update: {}", e)));
            }

            engine.pace();
        }

        // Cleanup
        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.2}s)",
            engine.frame_count(),
            engine.elapsed()
        );
        Ok(())
    }

    fn should_continue(&self) -> bool {
        let under_limit = self
            .config
            .max_frames
            .map_or(true, |limit| self.timer.frame_count() < limit);
        self.running && under_limit
    }

    /// Sleep until the next frame is due
    fn pace(&self) {
        if let Some(remaining) = self.config.target_fps.and_then(|fps| self.timer.remaining_budget(fps)) {
            std::thread::sleep(remaining);
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Seconds since the loop started
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed_secs()
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frame rate measured over the last frame
    pub fn current_fps(&self) -> f32 {
        self.timer.current_fps()
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
