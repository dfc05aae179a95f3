//! Software rasterizer backed by tiny-skia (re-exported by resvg).

use resvg::tiny_skia;

use crate::types::Color;

use super::commands::Path;
use super::flatten::DEFAULT_TOLERANCE;
use super::types::{Paint, PaintStyle};
use super::DrawSurface;

/// An in-memory RGBA surface.
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,
}

impl PixmapSurface {
    /// Create a transparent surface. Returns `None` for a zero-sized surface.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height)?;
        Some(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    /// Straight (non-premultiplied) RGBA value of a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            image::Rgba(self.pixel(x, y).unwrap_or([0, 0, 0, 0]))
        })
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }

    fn build_path(path: &Path) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::new();
        for contour in path.contours(DEFAULT_TOLERANCE) {
            let mut points = contour.iter();
            let Some(first) = points.next() else {
                continue;
            };
            builder.move_to(first.x, first.y);
            for p in points {
                builder.line_to(p.x, p.y);
            }
            builder.close();
        }
        builder.finish()
    }
}

impl DrawSurface for PixmapSurface {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let Some(skia_path) = Self::build_path(path) else {
            return;
        };

        let [r, g, b, a] = paint.color.to_rgba8();
        let mut skia_paint = tiny_skia::Paint::default();
        skia_paint.set_color_rgba8(r, g, b, a);
        skia_paint.anti_alias = paint.anti_alias;

        let transform = tiny_skia::Transform::identity();
        if matches!(paint.style, PaintStyle::Fill | PaintStyle::FillAndStroke) {
            self.pixmap.fill_path(
                &skia_path,
                &skia_paint,
                tiny_skia::FillRule::Winding,
                transform,
                None,
            );
        }
        if matches!(paint.style, PaintStyle::Stroke | PaintStyle::FillAndStroke) {
            let stroke = tiny_skia::Stroke {
                width: paint.stroke_width,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&skia_path, &skia_paint, &stroke, transform, None);
        }
    }
}
