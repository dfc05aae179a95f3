use crate::renderer::Path;
use crate::types::{Point, Rect};

use super::perimeter::{wrap_progress, Overlap, ProgressWindow, SegmentKind, SegmentMask};
use super::{ButtonGeometry, GeometryError, StyleConfig};

/// A piece of the lit window on the perimeter, in perimeter units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LitSpan {
    pub kind: SegmentKind,
    /// Start position in `[0, full_length]`
    pub start: f32,
    /// End position in `[start, full_length]`
    pub end: f32,
    /// Whether this span belongs to the part of the window that crossed position 0
    pub wrapped: bool,
}

impl LitSpan {
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// The three paths of one frame, drawn in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PillPaths {
    /// Full stadium silhouette
    pub border: Path,
    /// Lit band traveling clockwise along the border
    pub progress: Path,
    /// Stadium inset by the band thickness
    pub background: Path,
    spans: Vec<LitSpan>,
    lit: SegmentMask,
}

impl PillPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty all paths, keeping their buffers.
    pub fn reset(&mut self) {
        self.border.reset();
        self.progress.reset();
        self.background.reset();
        self.spans.clear();
        self.lit = SegmentMask::empty();
    }

    /// True when nothing would be drawn (button not laid out).
    pub fn is_empty(&self) -> bool {
        self.border.is_empty() && self.progress.is_empty() && self.background.is_empty()
    }

    /// Perimeter spans behind each progress element, one per element.
    pub fn spans(&self) -> &[LitSpan] {
        &self.spans
    }

    pub fn lit_segments(&self) -> SegmentMask {
        self.lit
    }

    /// Total lit length on the perimeter.
    pub fn lit_length(&self) -> f32 {
        self.spans.iter().map(LitSpan::length).sum()
    }
}

/// Computes the border, progress and background paths of a stadium button.
///
/// Holds only the read-only style of an animation session; every call is a
/// pure function of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathComputer {
    style: StyleConfig,
}

impl PathComputer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn compute(&self, animation: f32, geometry: &ButtonGeometry) -> PillPaths {
        let mut paths = PillPaths::new();
        self.compute_into(animation, geometry, &mut paths);
        paths
    }

    /// Compute straight from a host size. A size that is not laid out yet
    /// leaves `out` empty; a taller-than-wide size is an error and also
    /// leaves `out` empty.
    pub fn compute_for_size(
        &self,
        animation: f32,
        width: f32,
        height: f32,
        out: &mut PillPaths,
    ) -> Result<(), GeometryError> {
        out.reset();
        match ButtonGeometry::from_size(width, height)? {
            Some(geometry) => self.compute_into(animation, &geometry, out),
            None => log::trace!("Skipping path computation for {}x{}", width, height),
        }
        Ok(())
    }

    /// Rebuild `out` for the given frame, reusing its buffers.
    pub fn compute_into(&self, animation: f32, geometry: &ButtonGeometry, out: &mut PillPaths) {
        out.reset();

        let animation = wrap_progress(animation);
        let border_width = self.style.effective_border_width(geometry);

        add_stadium(&mut out.border, geometry, 0.0);
        self.add_progress(animation, geometry, border_width, out);
        add_stadium(&mut out.background, geometry, border_width);

        log::trace!(
            "Progress {:.4} lit {:?} over {} elements",
            animation,
            out.lit,
            out.progress.len()
        );
    }

    fn add_progress(
        &self,
        animation: f32,
        geometry: &ButtonGeometry,
        border_width: f32,
        out: &mut PillPaths,
    ) {
        let perimeter = geometry.perimeter();
        let window = ProgressWindow::new(
            animation,
            self.style.effective_progression(),
            perimeter.full_length(),
        );

        let (from, to) = window.current_loop();
        for overlap in perimeter.overlaps(from, to) {
            push_band(out, geometry, border_width, &overlap, false);
        }

        if let Some((from, to)) = window.next_loop() {
            for overlap in perimeter.overlaps(from, to) {
                push_band(out, geometry, border_width, &overlap, true);
            }
        }
    }
}

/// Rectangle plus two half discs, inset by `inset` on every side.
fn add_stadium(path: &mut Path, geometry: &ButtonGeometry, inset: f32) {
    let radius = geometry.ext_radius();
    let width = geometry.width();
    let height = geometry.height();
    let inset = inset.clamp(0.0, radius);

    path.add_rect(Rect::from_ltrb(radius, inset, width - radius, height - inset));
    path.add_arc(
        Point::new(width - radius, radius),
        radius - inset,
        -90.0,
        180.0,
    );
    path.add_arc(Point::new(radius, radius), radius - inset, 90.0, 180.0);
}

/// Emit the band element for one overlap and record its span.
fn push_band(
    out: &mut PillPaths,
    geometry: &ButtonGeometry,
    border_width: f32,
    overlap: &Overlap,
    wrapped: bool,
) {
    let radius = geometry.ext_radius();
    let width = geometry.width();
    let height = geometry.height();
    let (s, e) = (overlap.local_start, overlap.local_end);

    match overlap.kind {
        SegmentKind::Top => {
            out.progress
                .add_rect(Rect::from_ltrb(radius + s, 0.0, radius + e, border_width));
        }
        SegmentKind::Bottom => {
            // Clockwise on the bottom edge runs right to left.
            out.progress.add_rect(Rect::from_ltrb(
                width - radius - e,
                height - border_width,
                width - radius - s,
                height,
            ));
        }
        SegmentKind::RightCap | SegmentKind::LeftCap => {
            let (center, base_angle) = if overlap.kind == SegmentKind::RightCap {
                (Point::new(width - radius, radius), -90.0)
            } else {
                (Point::new(radius, radius), 90.0)
            };
            let (start_angle, sweep_angle) = cap_angles(s, e, overlap.segment_length);
            out.progress.add_ring_segment(
                center,
                radius,
                (radius - border_width).max(0.0),
                base_angle + start_angle,
                sweep_angle,
            );
        }
    }

    out.spans.push(LitSpan {
        kind: overlap.kind,
        start: overlap.segment_start + s,
        end: overlap.segment_start + e,
        wrapped,
    });
    out.lit |= overlap.kind.mask();
    if wrapped {
        out.lit |= SegmentMask::WRAP;
    }
}

/// Map a local cap range onto `[0°, 180°]`: (start offset, sweep).
fn cap_angles(local_start: f32, local_end: f32, half_circle_length: f32) -> (f32, f32) {
    if half_circle_length <= 0.0 {
        return (0.0, 0.0);
    }
    let start = (180.0 * local_start / half_circle_length).clamp(0.0, 180.0);
    let end = (180.0 * local_end / half_circle_length).clamp(0.0, 180.0);
    (start, (end - start).clamp(0.0, 180.0 - start))
}
