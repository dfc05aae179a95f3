use bitflags::bitflags;

/// The four pieces of a stadium outline, in clockwise order from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Top,
    RightCap,
    Bottom,
    LeftCap,
}

impl SegmentKind {
    pub const CLOCKWISE: [SegmentKind; 4] = [
        SegmentKind::Top,
        SegmentKind::RightCap,
        SegmentKind::Bottom,
        SegmentKind::LeftCap,
    ];

    pub fn mask(self) -> SegmentMask {
        match self {
            SegmentKind::Top => SegmentMask::TOP,
            SegmentKind::RightCap => SegmentMask::RIGHT_CAP,
            SegmentKind::Bottom => SegmentMask::BOTTOM,
            SegmentKind::LeftCap => SegmentMask::LEFT_CAP,
        }
    }
}

bitflags! {
    /// Which perimeter segments the lit window touched in a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SegmentMask: u8 {
        const TOP = 1 << 0;
        const RIGHT_CAP = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT_CAP = 1 << 3;
        /// The window crossed position 0 and continued on the next loop.
        const WRAP = 1 << 4;
    }
}

/// One entry of the perimeter table: `[start, end)` in perimeter units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerimeterSegment {
    pub kind: SegmentKind,
    pub start: f32,
    pub end: f32,
}

impl PerimeterSegment {
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// Intersection of a window with one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub kind: SegmentKind,
    /// Offset from the segment start where the overlap begins
    pub local_start: f32,
    /// Offset from the segment start where the overlap ends
    pub local_end: f32,
    /// Length of the whole segment
    pub segment_length: f32,
    /// Start of the segment on the perimeter
    pub segment_start: f32,
}

impl Overlap {
    pub fn length(&self) -> f32 {
        self.local_end - self.local_start
    }
}

/// Ordered table of the four segments tiling `[0, full_length)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perimeter {
    segments: [PerimeterSegment; 4],
    full_length: f32,
}

impl Perimeter {
    pub fn new(segment_length: f32, half_circle_length: f32) -> Self {
        let segment_length = segment_length.max(0.0);
        let half_circle_length = half_circle_length.max(0.0);
        let lengths = [
            segment_length,
            half_circle_length,
            segment_length,
            half_circle_length,
        ];
        let full_length = 2.0 * segment_length + 2.0 * half_circle_length;

        let mut start = 0.0;
        let segments = std::array::from_fn(|i| {
            // The last segment ends exactly at full_length so the table tiles
            // the loop without a float gap.
            let end = if i == 3 { full_length } else { start + lengths[i] };
            let segment = PerimeterSegment {
                kind: SegmentKind::CLOCKWISE[i],
                start,
                end,
            };
            start = end;
            segment
        });

        Self {
            segments,
            full_length,
        }
    }

    pub fn full_length(&self) -> f32 {
        self.full_length
    }

    pub fn segments(&self) -> &[PerimeterSegment; 4] {
        &self.segments
    }

    /// Clamp `[from, to]` against every segment, yielding the non-empty
    /// intersections in clockwise order. Positions are expected in
    /// `[0, full_length]`.
    pub fn overlaps(&self, from: f32, to: f32) -> impl Iterator<Item = Overlap> + '_ {
        self.segments.iter().filter_map(move |segment| {
            let start = from.max(segment.start);
            let end = to.min(segment.end);
            if end <= start {
                return None;
            }
            let segment_length = segment.length();
            Some(Overlap {
                kind: segment.kind,
                local_start: (start - segment.start).clamp(0.0, segment_length),
                local_end: (end - segment.start).clamp(0.0, segment_length),
                segment_length,
                segment_start: segment.start,
            })
        })
    }
}

/// Fold any driver value into `[0, 1)`. Non-finite input maps to 0.
pub fn wrap_progress(animation: f32) -> f32 {
    if !animation.is_finite() {
        return 0.0;
    }
    let wrapped = animation.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// The lit window `[tail, head]` for one frame. `head` may run past the end
/// of the loop by at most the lit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressWindow {
    pub tail: f32,
    pub head: f32,
    full_length: f32,
}

impl ProgressWindow {
    /// `animation` must already be in `[0, 1)`, `progression` in `[0, 1]`.
    pub fn new(animation: f32, progression: f32, full_length: f32) -> Self {
        Self {
            tail: animation * full_length,
            head: (animation + progression) * full_length,
            full_length,
        }
    }

    pub fn length(&self) -> f32 {
        self.head - self.tail
    }

    pub fn wraps(&self) -> bool {
        self.head > self.full_length
    }

    /// The part of the window on the current loop.
    pub fn current_loop(&self) -> (f32, f32) {
        (self.tail, self.head.min(self.full_length))
    }

    /// The part that crossed position 0, re-based onto the next loop.
    pub fn next_loop(&self) -> Option<(f32, f32)> {
        self.wraps()
            .then(|| (0.0, (self.head - self.full_length).min(self.full_length)))
    }
}
