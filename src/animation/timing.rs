//! Mapping from cycle phase to band position.
//!
//! A loading loop runs [`TimingFunction::Linear`] so the band travels the
//! border at constant speed. [`TimingFunction::Custom`] lets a host shape the
//! cycle, for instance to step the band in discrete jumps:
//!
//! ```
//! use pill_progress::animation::{Timeline, TimingFunction};
//!
//! let stepped = Timeline::default().timing(TimingFunction::custom(|t| (t * 8.0).floor() / 8.0));
//! assert_eq!(stepped.timing.evaluate(0.3), 0.25);
//! ```

use std::fmt;
use std::sync::Arc;

type PhaseFn = dyn Fn(f32) -> f32 + Send + Sync;

#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Position equals phase
    #[default]
    Linear,
    /// Host supplied curve; results outside `[0, 1)` are wrapped by the animator
    Custom(Arc<PhaseFn>),
}

impl TimingFunction {
    pub fn custom(curve: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(curve))
    }

    /// Band position for a phase in `[0, 1)`.
    pub fn evaluate(&self, phase: f32) -> f32 {
        match self {
            Self::Linear => phase,
            Self::Custom(curve) => curve(phase),
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear)
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_linear() { "Linear" } else { "Custom" })
    }
}
