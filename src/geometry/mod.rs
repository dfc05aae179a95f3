//! Stadium geometry and the progress path computation.
//!
//! A loading button is a rectangle capped by two semicircles whose radius is
//! half the button height. Its outline is parameterized as a closed 1-D
//! perimeter starting at the left end of the top edge and running clockwise:
//! top edge, right cap, bottom edge, left cap. A window on that perimeter is
//! lit every frame; [`PathComputer`] turns it into drawable paths.

mod paths;
mod perimeter;

pub use paths::{LitSpan, PathComputer, PillPaths};
pub use perimeter::{
    wrap_progress, Overlap, Perimeter, PerimeterSegment, ProgressWindow, SegmentKind, SegmentMask,
};

use std::f32::consts::PI;

use thiserror::Error;

/// Reasons a button size cannot be turned into a stadium.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("button is taller than wide ({width}x{height}), a stadium needs width >= height")]
    TallerThanWide { width: f32, height: f32 },
    #[error("button size {width}x{height} is not finite")]
    NonFinite { width: f32, height: f32 },
    #[error("button size {width}x{height} is empty")]
    Empty { width: f32, height: f32 },
}

/// Validated pixel size of a stadium button (`width >= height > 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    width: f32,
    height: f32,
}

impl ButtonGeometry {
    /// Validate a laid-out size.
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Empty { width, height });
        }
        if width < height {
            return Err(GeometryError::TallerThanWide { width, height });
        }
        Ok(Self { width, height })
    }

    /// Like [`ButtonGeometry::new`], but a zero or negative dimension yields
    /// `Ok(None)`: the host has not laid the button out yet.
    pub fn from_size(width: f32, height: f32) -> Result<Option<Self>, GeometryError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Ok(None);
        }
        Self::new(width, height).map(Some)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Radius of both end caps.
    pub fn ext_radius(&self) -> f32 {
        self.height / 2.0
    }

    /// Length of one straight edge, zero for a circular button.
    pub fn segment_length(&self) -> f32 {
        (self.width - self.height).max(0.0)
    }

    pub fn half_circle_length(&self) -> f32 {
        PI * self.ext_radius()
    }

    pub fn circle_length(&self) -> f32 {
        2.0 * self.half_circle_length()
    }

    pub fn full_length(&self) -> f32 {
        2.0 * self.segment_length() + self.circle_length()
    }

    pub fn perimeter(&self) -> Perimeter {
        Perimeter::new(self.segment_length(), self.half_circle_length())
    }
}

/// Style of the traveling band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    /// Thickness of the progress band in pixels
    pub border_width: f32,
    /// Fraction of the perimeter covered by the lit band (0.0 to 1.0)
    pub progression_percent: f32,
}

impl StyleConfig {
    pub const DEFAULT_BORDER_WIDTH: f32 = 12.0;
    pub const DEFAULT_PROGRESSION_PERCENT: f32 = 0.3;

    pub fn new(border_width: f32, progression_percent: f32) -> Self {
        Self {
            border_width,
            progression_percent,
        }
    }

    pub fn border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn progression_percent(mut self, progression_percent: f32) -> Self {
        self.progression_percent = progression_percent;
        self
    }

    /// Band thickness usable on `geometry`: within `[0, ext_radius]`.
    pub fn effective_border_width(&self, geometry: &ButtonGeometry) -> f32 {
        let width = if self.border_width.is_finite() {
            self.border_width
        } else {
            Self::DEFAULT_BORDER_WIDTH
        };
        width.clamp(0.0, geometry.ext_radius())
    }

    /// Lit fraction clamped to `[0, 1]`.
    pub fn effective_progression(&self) -> f32 {
        if self.progression_percent.is_finite() {
            self.progression_percent.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_PROGRESSION_PERCENT
        }
    }

    /// Whether the values are usable as given. A border wider than the end
    /// cap radius is still clamped per geometry.
    pub fn is_valid(&self) -> bool {
        self.border_width.is_finite()
            && self.border_width >= 0.0
            && self.effective_progression() == self.progression_percent
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BORDER_WIDTH, Self::DEFAULT_PROGRESSION_PERCENT)
    }
}
