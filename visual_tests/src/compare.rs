use crate::{Result, VisualTestError};
use image::{Rgba, RgbaImage};
use image_compare::Algorithm;
use std::path::Path;

/// Result of comparing two images
pub struct CompareResult {
    /// Similarity score from 0.0 to 1.0
    pub similarity: f64,
}

/// Compare a rendered frame against a reference PNG using SSIM
pub fn compare_images(reference: &Path, rendered: &RgbaImage) -> Result<CompareResult> {
    let ref_rgb = image::open(reference)?.to_rgb8();
    let cap_rgb = image::DynamicImage::ImageRgba8(rendered.clone()).to_rgb8();

    if ref_rgb.dimensions() != cap_rgb.dimensions() {
        return Err(VisualTestError::Compare(format!(
            "Image dimensions don't match: reference {:?} vs rendered {:?}",
            ref_rgb.dimensions(),
            cap_rgb.dimensions()
        )));
    }

    let result =
        image_compare::rgb_similarity_structure(&Algorithm::MSSIMSimple, &ref_rgb, &cap_rgb)
            .map_err(|e| VisualTestError::Compare(format!("SSIM comparison failed: {}", e)))?;

    Ok(CompareResult {
        similarity: result.score,
    })
}

/// Build a diff image: differing pixels in red over a dimmed copy of the render
pub fn diff_image(reference: &RgbaImage, rendered: &RgbaImage) -> RgbaImage {
    let (width, height) = rendered.dimensions();
    RgbaImage::from_fn(width, height, |x, y| {
        let cap_pixel = rendered.get_pixel(x, y);
        let diff = if x < reference.width() && y < reference.height() {
            pixel_difference(reference.get_pixel(x, y), cap_pixel)
        } else {
            255
        };

        if diff > 10 {
            let intensity = (diff as f32 / 255.0 * 200.0 + 55.0) as u8;
            Rgba([intensity, 0, 0, 255])
        } else {
            Rgba([cap_pixel[0] / 3, cap_pixel[1] / 3, cap_pixel[2] / 3, 255])
        }
    })
}

/// Write the diff between a reference PNG and a rendered frame
pub fn generate_diff_image(reference: &Path, rendered: &RgbaImage, output: &Path) -> Result<()> {
    let ref_rgba = image::open(reference)?.to_rgba8();
    diff_image(&ref_rgba, rendered).save(output)?;
    Ok(())
}

/// Maximum channel difference between two pixels
fn pixel_difference(a: &Rgba<u8>, b: &Rgba<u8>) -> u8 {
    let dr = (a[0] as i16 - b[0] as i16).unsigned_abs() as u8;
    let dg = (a[1] as i16 - b[1] as i16).unsigned_abs() as u8;
    let db = (a[2] as i16 - b[2] as i16).unsigned_abs() as u8;
    dr.max(dg).max(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_images_have_no_red() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([90, 90, 90, 255]));
        let diff = diff_image(&img, &img);
        assert!(diff.pixels().all(|p| p[0] == 30 && p[1] == 30));
    }

    #[test]
    fn test_changed_pixel_is_highlighted() {
        let reference = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mut rendered = reference.clone();
        rendered.put_pixel(1, 2, Rgba([255, 255, 0, 255]));
        let diff = diff_image(&reference, &rendered);
        assert_eq!(diff.get_pixel(1, 2), &Rgba([255, 0, 0, 255]));
        assert_eq!(diff.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    }
}
