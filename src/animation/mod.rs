mod animator;
mod timing;

pub use animator::ProgressAnimator;
pub use timing::TimingFunction;

/// How many cycles a timeline runs before it stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Loop forever
    #[default]
    Infinite,
    /// Run this many cycles, then stop
    Count(u32),
}

/// Configuration of the progress clock driving a loading button
#[derive(Clone, Debug)]
pub struct Timeline {
    /// Duration of one cycle in milliseconds
    pub duration_ms: f32,
    /// Timing function shaping each cycle
    pub timing: TimingFunction,
    /// Delay before the first cycle starts in milliseconds
    pub delay_ms: f32,
    /// Number of cycles
    pub repeat: RepeatMode,
}

impl Timeline {
    /// One loop every 3 seconds, linear, repeating forever.
    pub const DEFAULT_DURATION_MS: f32 = 3000.0;

    /// Create a new timeline with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
            repeat: RepeatMode::Infinite,
        }
    }

    /// Set the delay before the first cycle starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration of one cycle
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Set how many cycles run
    pub fn repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS, TimingFunction::Linear)
    }
}
