//! Frame pacing and real frame rate measurement
//!
//! The simulation never reads the clock; only the shell uses this to hold
//! each frame to the target rate and to report the measured rate.

use std::time::Duration;

/// Number of frame timestamps kept for the measured rate
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Start of the frame currently being built (seconds)
    frame_start: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_start: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Frames per second over the last 60 frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// How long to block so the frame that started at the previous call
    /// lasts `1 / target_fps` seconds. `now` is in seconds.
    pub fn remaining(&self, now: f64, target_fps: u32) -> Option<Duration> {
        let start = self.frame_start?;
        let budget = 1.0 / f64::from(target_fps.max(1));
        let left = budget - (now - start);
        (left > 0.0).then(|| Duration::from_secs_f64(left))
    }

    /// Mark the start of a new frame at `now` seconds
    pub fn begin_frame(&mut self, now: f64) {
        self.frame_start = Some(now);

        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry is the one we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = now - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }
}
