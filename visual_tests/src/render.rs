use crate::{Result, VisualTestError};
use pill_progress::geometry::{ButtonGeometry, PathComputer, StyleConfig};
use pill_progress::renderer::{render_paths, Palette};
use pill_progress::{Color, PixmapSurface};
use std::path::Path;

/// A single frame of a loading button to render
#[derive(Clone, Debug)]
pub struct Scene {
    /// Name used for the reference and output files
    pub name: String,
    /// Button width in pixels
    pub width: u32,
    /// Button height in pixels
    pub height: u32,
    /// Progress sample of the frame
    pub progress: f32,
    pub style: StyleConfig,
    pub palette: Palette,
    /// Color the surface is cleared to before drawing
    pub clear_color: Color,
}

impl Scene {
    pub fn new(name: impl Into<String>, width: u32, height: u32, progress: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            progress,
            style: StyleConfig::default(),
            palette: Palette::default(),
            clear_color: Color::BLACK,
        }
    }

    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }
}

/// Rasterize a scene with the software surface
pub fn render_scene(scene: &Scene) -> Result<image::RgbaImage> {
    let geometry = ButtonGeometry::new(scene.width as f32, scene.height as f32)
        .map_err(|e| VisualTestError::Render(format!("{}: {}", scene.name, e)))?;
    let mut surface = PixmapSurface::new(scene.width, scene.height).ok_or_else(|| {
        VisualTestError::Render(format!(
            "{}: cannot allocate a {}x{} surface",
            scene.name, scene.width, scene.height
        ))
    })?;

    let paths = PathComputer::new(scene.style).compute(scene.progress, &geometry);
    surface.clear(scene.clear_color);
    render_paths(&mut surface, &paths, &scene.palette);

    Ok(surface.to_image())
}

/// Render a scene and save it as PNG
pub fn render_scene_to(scene: &Scene, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    render_scene(scene)?.save(output_path)?;
    Ok(())
}
