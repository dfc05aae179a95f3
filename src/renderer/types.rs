//! Shared types for the renderer.

use crate::types::Color;

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Fill the enclosed area only
    Fill,
    /// Stroke the outline only
    Stroke,
    /// Fill, then stroke the outline with the same color
    #[default]
    FillAndStroke,
}

/// Color and style used for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    /// Outline width in pixels; 0 draws a one pixel hairline
    pub stroke_width: f32,
    pub anti_alias: bool,
}

impl Paint {
    /// Create a paint with the given color, filled and stroked with a hairline
    pub fn new(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::FillAndStroke,
            stroke_width: 0.0,
            anti_alias: true,
        }
    }

    pub fn style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// The three colors of a loading button, one per path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Neutral color behind the whole silhouette
    pub border: Paint,
    /// Accent color of the traveling band
    pub progress: Paint,
    /// Surface the foreground content sits on
    pub background: Paint,
}

impl Palette {
    pub fn new(border: Color, progress: Color, background: Color) -> Self {
        Self {
            border: Paint::new(border),
            progress: Paint::new(progress),
            background: Paint::new(background),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Color::GRAY, Color::YELLOW, Color::WHITE)
    }
}
