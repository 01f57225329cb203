use std::time::Instant;

use crate::foundation::core::{Fps, FrameIndex};

/// Elapsed-time reader consulted once per tick by the engine.
pub trait Clock: std::fmt::Debug {
    /// Seconds since engine start at the beginning of frame `idx`.
    fn elapsed_secs(&mut self, idx: FrameIndex) -> f64;
}

/// Deterministic clock: frame `n` happens at `n / fps` seconds.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    fps: Fps,
}

impl FixedStepClock {
    /// Create a clock ticking at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self { fps }
    }
}

impl Clock for FixedStepClock {
    fn elapsed_secs(&mut self, idx: FrameIndex) -> f64 {
        self.fps.frames_to_secs(idx.0)
    }
}

/// Wall-clock reader measuring time since construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    /// Start measuring now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn elapsed_secs(&mut self, _idx: FrameIndex) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Which [`Clock`] drives a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// Time derived from the frame index (reproducible output).
    #[default]
    FixedStep,
    /// Time read from the monotonic wall clock while rendering.
    WallClock,
}

impl ClockMode {
    /// Instantiate the clock for this mode.
    pub fn build(self, fps: Fps) -> Box<dyn Clock> {
        match self {
            Self::FixedStep => Box::new(FixedStepClock::new(fps)),
            Self::WallClock => Box::new(MonotonicClock::start()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
