pub mod commands;
pub mod flatten;
pub mod pixmap;
pub mod types;

pub use commands::{Path, PathElement};
pub use flatten::{flatten_element, DEFAULT_TOLERANCE};
pub use pixmap::PixmapSurface;
pub use types::{Paint, PaintStyle, Palette};

use crate::geometry::PillPaths;

/// Anything that can rasterize a closed path with a paint.
pub trait DrawSurface {
    fn draw_path(&mut self, path: &Path, paint: &Paint);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        (**self).draw_path(path, paint);
    }
}

/// Issue the three draw calls of a frame: border, then progress band, then
/// the inset background. Foreground content is drawn by the caller afterwards.
pub fn render_paths<S: DrawSurface + ?Sized>(surface: &mut S, paths: &PillPaths, palette: &Palette) {
    if paths.is_empty() {
        return;
    }
    surface.draw_path(&paths.border, &palette.border);
    surface.draw_path(&paths.progress, &palette.progress);
    surface.draw_path(&paths.background, &palette.background);
}
