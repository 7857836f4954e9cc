//! Time management utilities

use std::time::{Duration, Instant};

/// Monotonic scene clock
///
/// Reports seconds elapsed since the clock was started. The frame loop
/// queries it once per frame and hands the value to the animation systems.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock {
    /// Start a new clock at zero
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Restart the clock at zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time since start in seconds
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

/// Per-frame bookkeeping for the main loop
pub struct FrameTimer {
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }

    /// Time left in the current frame for the given target rate
    pub fn remaining_budget(&self, target_fps: u32) -> Option<Duration> {
        if target_fps == 0 {
            return None;
        }
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps));
        budget.checked_sub(self.last_frame.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let clock = Clock::start();
        let first = clock.elapsed_secs();
        let second = clock.elapsed_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn test_frame_timer_counts_frames() {
        let mut timer = FrameTimer::new();
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.delta_time() >= 0.0);
    }

    #[test]
    fn test_fps_follows_delta() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.current_fps(), 0.0);

        std::thread::sleep(Duration::from_millis(5));
        timer.update();
        assert!(timer.delta_time() > 0.0);
        assert!((timer.current_fps() - 1.0 / timer.delta_time()).abs() < 1e-3);
    }

    #[test]
    fn test_unlimited_rate_has_no_budget() {
        let timer = FrameTimer::new();
        assert!(timer.remaining_budget(0).is_none());
    }
}
