//! The loading button: animator, path computation and paints in one place.

use std::time::Instant;

use crate::animation::{ProgressAnimator, Timeline};
use crate::geometry::{wrap_progress, GeometryError, PathComputer, PillPaths, StyleConfig};
use crate::renderer::{render_paths, DrawSurface, Palette};
use crate::types::Color;

#[derive(Clone, Debug, Default)]
pub struct ButtonConfig {
    pub style: StyleConfig,
    pub palette: Palette,
    pub timeline: Timeline,
}

impl ButtonConfig {
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = timeline;
        self
    }

    pub fn border_width(mut self, border_width: f32) -> Self {
        self.style.border_width = border_width;
        self
    }

    pub fn progression_percent(mut self, progression_percent: f32) -> Self {
        self.style.progression_percent = progression_percent;
        self
    }

    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.timeline.duration_ms = duration_ms;
        self
    }

    pub fn colors(mut self, border: Color, progress: Color, background: Color) -> Self {
        self.palette = Palette::new(border, progress, background);
        self
    }
}

/// A pill-shaped button whose border is lit by a band running clockwise
/// around it while loading.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use pill_progress::{ButtonConfig, LoadingButton, PixmapSurface};
///
/// let mut button = LoadingButton::new(ButtonConfig::default());
/// let t0 = Instant::now();
/// button.start(t0);
///
/// let mut surface = PixmapSurface::new(300, 100).unwrap();
/// if button.on_frame(t0 + Duration::from_millis(16), 300.0, 100.0) {
///     button.draw(&mut surface);
/// }
/// ```
#[derive(Debug)]
pub struct LoadingButton {
    config: ButtonConfig,
    computer: PathComputer,
    animator: ProgressAnimator,
    paths: PillPaths,
    size: (f32, f32),
    progress: Option<f32>,
    /// Size last reported as invalid, to warn once per size
    rejected_size: Option<(f32, f32)>,
}

impl LoadingButton {
    pub fn new(config: ButtonConfig) -> Self {
        if !config.style.is_valid() {
            log::warn!(
                "Style {:?} is out of range and will be clamped when drawing",
                config.style
            );
        }
        Self {
            computer: PathComputer::new(config.style),
            animator: ProgressAnimator::new(config.timeline.clone()),
            paths: PillPaths::new(),
            size: (0.0, 0.0),
            progress: None,
            rejected_size: None,
            config,
        }
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Start the loading animation, restarting it if it already runs.
    pub fn start(&mut self, now: Instant) {
        self.animator.start(now);
    }

    pub fn stop(&mut self) {
        self.animator.stop();
        self.progress = None;
        self.paths.reset();
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.animator.is_running(now)
    }

    /// Progress sample the current paths were built from.
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    pub fn paths(&self) -> &PillPaths {
        &self.paths
    }

    /// Advance to `now` with the current host size. Returns whether the paths
    /// changed and the button needs a redraw.
    pub fn on_frame(&mut self, now: Instant, width: f32, height: f32) -> bool {
        let Some(progress) = self.animator.sample(now) else {
            if self.progress.take().is_some() {
                self.paths.reset();
                return true;
            }
            return false;
        };
        if self.progress == Some(progress) && self.size == (width, height) {
            return false;
        }
        match self.set_progress(progress, width, height) {
            Ok(()) => true,
            Err(err) => {
                if self.rejected_size != Some((width, height)) {
                    log::warn!("Not drawing loading button: {}", err);
                    self.rejected_size = Some((width, height));
                }
                true
            }
        }
    }

    /// Rebuild the paths for an explicit progress sample, bypassing the
    /// animator. On error the paths are left empty.
    pub fn set_progress(
        &mut self,
        progress: f32,
        width: f32,
        height: f32,
    ) -> Result<(), GeometryError> {
        if self.size != (width, height) {
            log::debug!("Loading button resized to {}x{}", width, height);
            self.size = (width, height);
        }
        self.progress = Some(wrap_progress(progress));
        self.computer
            .compute_for_size(progress, width, height, &mut self.paths)?;
        self.rejected_size = None;
        Ok(())
    }

    /// Draw the border, progress band and background, in that order.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render_paths(surface, &self.paths, &self.config.palette);
    }
}

impl Default for LoadingButton {
    fn default() -> Self {
        Self::new(ButtonConfig::default())
    }
}
