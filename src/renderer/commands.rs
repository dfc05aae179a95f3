//! Path element definitions produced by the geometry stage.

use crate::types::{Point, Rect};

/// A single closed sub-path in surface coordinates.
///
/// Angles are in degrees, clockwise-positive on a y-down surface
/// (0° points right, 90° points down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Axis-aligned rectangle.
    Rect(Rect),

    /// Circular arc. Filling closes it with the chord between its end points,
    /// so a 180° arc fills a half disc.
    Arc {
        /// Circle center
        center: Point,
        /// Circle radius in pixels
        radius: f32,
        /// Angle of the first point
        start_angle: f32,
        /// Angular extent, positive = clockwise
        sweep_angle: f32,
    },

    /// Annular sector: the outer arc followed by the inner arc traced back,
    /// joined at both ends.
    RingSegment {
        /// Shared center of both arcs
        center: Point,
        /// Radius of the outer arc
        outer_radius: f32,
        /// Radius of the inner arc
        inner_radius: f32,
        /// Angle where the segment starts
        start_angle: f32,
        /// Angular extent, positive = clockwise
        sweep_angle: f32,
    },
}

impl PathElement {
    /// Whether the element encloses no area.
    pub fn is_degenerate(&self) -> bool {
        match self {
            PathElement::Rect(rect) => rect.is_empty(),
            PathElement::Arc {
                radius,
                sweep_angle,
                ..
            } => *radius <= 0.0 || *sweep_angle == 0.0,
            PathElement::RingSegment {
                outer_radius,
                inner_radius,
                sweep_angle,
                ..
            } => outer_radius <= inner_radius || *sweep_angle == 0.0,
        }
    }
}

/// An ordered list of sub-paths, reset and rebuilt every frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all elements, keeping the allocation for the next frame.
    pub fn reset(&mut self) {
        self.elements.clear();
    }

    pub fn add_rect(&mut self, rect: Rect) {
        self.elements.push(PathElement::Rect(rect));
    }

    pub fn add_arc(&mut self, center: Point, radius: f32, start_angle: f32, sweep_angle: f32) {
        self.elements.push(PathElement::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn add_ring_segment(
        &mut self,
        center: Point,
        outer_radius: f32,
        inner_radius: f32,
        start_angle: f32,
        sweep_angle: f32,
    ) {
        self.elements.push(PathElement::RingSegment {
            center,
            outer_radius,
            inner_radius,
            start_angle,
            sweep_angle,
        });
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Allocated element slots, used to check that per-frame rebuilds stay bounded.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
