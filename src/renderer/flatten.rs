//! Flattening of path elements into closed polylines for rasterization.

use crate::types::Point;

use super::commands::{Path, PathElement};

/// Default maximum distance between a true arc and its polyline, in pixels.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Number of chords needed so no chord strays more than `tolerance` from the arc.
fn arc_steps(radius: f32, sweep_degrees: f32, tolerance: f32) -> usize {
    let sweep = sweep_degrees.abs().to_radians();
    if sweep == 0.0 || radius <= 0.0 {
        return 1;
    }
    let max_step = if tolerance > 0.0 && tolerance < radius {
        2.0 * (1.0 - tolerance / radius).acos()
    } else {
        std::f32::consts::FRAC_PI_2
    };
    ((sweep / max_step).ceil() as usize).clamp(1, 1024)
}

/// Append the points of an arc, both end points included.
fn push_arc(
    out: &mut Vec<Point>,
    center: Point,
    radius: f32,
    start_angle: f32,
    sweep_angle: f32,
    tolerance: f32,
) {
    let steps = arc_steps(radius, sweep_angle, tolerance);
    for i in 0..=steps {
        let angle = start_angle + sweep_angle * (i as f32 / steps as f32);
        out.push(Point::on_circle(center, radius.max(0.0), angle));
    }
}

/// Flatten one element into a closed contour (the closing edge is implicit).
pub fn flatten_element(element: &PathElement, tolerance: f32) -> Vec<Point> {
    let mut points = Vec::new();
    match *element {
        PathElement::Rect(rect) => {
            points.push(Point::new(rect.x, rect.y));
            points.push(Point::new(rect.right(), rect.y));
            points.push(Point::new(rect.right(), rect.bottom()));
            points.push(Point::new(rect.x, rect.bottom()));
        }
        PathElement::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
        } => push_arc(
            &mut points,
            center,
            radius,
            start_angle,
            sweep_angle,
            tolerance,
        ),
        PathElement::RingSegment {
            center,
            outer_radius,
            inner_radius,
            start_angle,
            sweep_angle,
        } => {
            push_arc(
                &mut points,
                center,
                outer_radius,
                start_angle,
                sweep_angle,
                tolerance,
            );
            push_arc(
                &mut points,
                center,
                inner_radius,
                start_angle + sweep_angle,
                -sweep_angle,
                tolerance,
            );
        }
    }
    points
}

impl Path {
    /// Closed polylines approximating every element with a visible area, in
    /// element order.
    pub fn contours(&self, tolerance: f32) -> Vec<Vec<Point>> {
        self.iter()
            .filter(|element| !element.is_degenerate())
            .map(|element| flatten_element(element, tolerance))
            .collect()
    }
}
