use std::time::{Duration, Instant};

use super::{RepeatMode, Timeline};
use crate::geometry::wrap_progress;

/// Clock producing the progress sample of each frame.
///
/// The animator never ticks by itself: the host asks for a sample whenever it
/// is about to draw, passing the current time.
#[derive(Debug, Clone, Default)]
pub struct ProgressAnimator {
    timeline: Timeline,
    /// Time when the current run started
    start_time: Option<Instant>,
}

impl ProgressAnimator {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            start_time: None,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Start, or restart from phase 0 if already running.
    pub fn start(&mut self, now: Instant) {
        if self.start_time.is_some() {
            log::debug!("Restarting progress animation");
        } else {
            log::debug!(
                "Starting progress animation ({} ms per cycle)",
                self.timeline.duration_ms
            );
        }
        self.start_time = Some(now);
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn is_started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.sample(now).is_some()
    }

    /// Progress at `now`, in `[0, 1)`. `None` when not started or finished.
    pub fn sample(&self, now: Instant) -> Option<f32> {
        let start = self.start_time?;
        self.sample_elapsed(now.saturating_duration_since(start))
    }

    /// Progress after `elapsed` time since start, in `[0, 1)`. `None` once a
    /// finite number of cycles has completed.
    pub fn sample_elapsed(&self, elapsed: Duration) -> Option<f32> {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0 - f64::from(self.timeline.delay_ms);
        if elapsed_ms < 0.0 {
            return Some(wrap_progress(self.timeline.timing.evaluate(0.0)));
        }
        if self.timeline.duration_ms <= 0.0 || !self.timeline.duration_ms.is_finite() {
            return match self.timeline.repeat {
                RepeatMode::Infinite => Some(0.0),
                RepeatMode::Count(_) => None,
            };
        }

        let cycles = elapsed_ms / f64::from(self.timeline.duration_ms);
        if let RepeatMode::Count(count) = self.timeline.repeat {
            if cycles >= f64::from(count) {
                return None;
            }
        }

        let fraction = cycles.fract() as f32;
        Some(wrap_progress(self.timeline.timing.evaluate(fraction)))
    }
}
