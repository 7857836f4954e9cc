//! Haunted tower demo application
//!
//! Builds the haunted tower scene and drives its ghosts through the engine's
//! frame loop without a window. Usage:
//!
//! ```text
//! haunted_tower [config.toml | config.ron]
//! ```

use haunt_engine::foundation::logging;
use haunt_engine::prelude::*;

/// Seconds between status lines
const REPORT_INTERVAL: f32 = 1.0;

struct HauntedTowerApp {
    config: HauntedSceneConfig,
    seed: u64,
    scene: Option<HauntedScene>,
    next_report: f32,
}

impl HauntedTowerApp {
    fn new(config: HauntedSceneConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            scene: None,
            next_report: 0.0,
        }
    }
}

impl Application for HauntedTowerApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Building scene with seed {}", self.seed);
        let mut rng = seeded(self.seed);
        let scene = HauntedScene::build(&self.config, &mut rng)?;

        let camera = &scene.camera;
        log::info!(
            "Camera at {:?} looking at {:?} (aspect {:.3})",
            camera.position, camera.target, camera.aspect
        );
        log::info!("Clear color {}", scene.clear_color().to_hex());

        self.scene = Some(scene);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, elapsed: f32) -> Result<(), AppError> {
        let scene = self
            .scene
            .as_mut()
            .ok_or_else(|| AppError::Custom("update before initialize".to_string()))?;

        scene.update(elapsed);

        for (index, ghost) in scene.ghosts.iter().enumerate() {
            log::trace!("ghost {} at {:?}", index, ghost.position());
        }

        if elapsed >= self.next_report {
            log::info!(
                "t={:.1}s frame {} ({:.0} fps)",
                elapsed,
                engine.frame_count(),
                engine.current_fps()
            );
            self.next_report = elapsed + REPORT_INTERVAL;
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!("Haunting ended after {} frames", engine.frame_count());
    }
}

fn load_config() -> Result<HauntedSceneConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => HauntedSceneConfig::load_from_file(path),
        None => Ok(HauntedSceneConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting Haunted Tower");

    // Unseeded runs still log their seed so they can be replayed.
    let seed = config.engine.seed.unwrap_or_else(rand::random);
    let engine_config = config.engine.clone();
    let mut app = HauntedTowerApp::new(config, seed);

    match Engine::run(engine_config, &mut app) {
        Ok(()) => {
            log::info!("Haunted Tower exited successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Haunted Tower failed: {}", e);
            Err(e.into())
        }
    }
}
