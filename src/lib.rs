//! Progress geometry for pill-shaped loading buttons.
//!
//! Every frame, a progress sample in `[0, 1)` is turned into three paths: the
//! stadium silhouette, a band lighting part of its border and traveling
//! clockwise, and the inset surface the button content sits on. The
//! computation itself lives in [`geometry`]; [`animation`] supplies the
//! looping clock and [`renderer`] the drawing surface contract plus a
//! software rasterizer.

pub mod animation;
pub mod geometry;
pub mod renderer;

mod button;
mod types;

pub use button::{ButtonConfig, LoadingButton};
pub use renderer::{DrawSurface, PixmapSurface};
pub use types::{Color, Point, Rect};

pub mod prelude {
    pub use crate::animation::{ProgressAnimator, RepeatMode, Timeline, TimingFunction};
    pub use crate::geometry::{
        ButtonGeometry, GeometryError, LitSpan, PathComputer, PillPaths, SegmentKind,
        SegmentMask, StyleConfig,
    };
    pub use crate::renderer::{
        render_paths, DrawSurface, Paint, PaintStyle, Palette, Path, PathElement, PixmapSurface,
    };
    pub use crate::types::{Color, Point, Rect};
    pub use crate::{ButtonConfig, LoadingButton};
}
