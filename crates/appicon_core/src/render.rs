//! The resize primitive: cover-fit rendering, PNG encoding, round masking
//!
//! Every icon is rendered with a cover fit - the source fills the whole
//! target square, preserving aspect ratio and cropping overflow centered.
//! Icons are never letterboxed; a non-square source loses its long edges
//! instead of gaining transparent padding.

use crate::IconError;
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::io::Cursor;

/// Render the source into an exact `size`x`size` square, cover fit
pub fn render_cover(source: &DynamicImage, size: u32) -> DynamicImage {
    source.resize_to_fill(size, size, FilterType::Lanczos3)
}

/// Encode an image as lossless PNG bytes
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, IconError> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| IconError::render(format!("failed to encode PNG: {}", e)))?;
    Ok(buffer)
}

/// Composite a full-bleed circular alpha mask over a square icon
///
/// Post-process for Android round launcher icons: the base render is reused
/// as-is and only the alpha channel changes. The edge is smoothed over about
/// 1.5px to avoid a stair-stepped rim.
pub fn apply_round_mask(img: &DynamicImage) -> DynamicImage {
    let width = img.width();
    let height = img.height();
    let mut rgba = img.to_rgba8();

    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;
    let edge = 1.5f32;

    for (x, y, pixel) in rgba.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let dist = (dx * dx + dy * dy).sqrt();

        let coverage = if dist <= radius - edge {
            1.0
        } else if dist < radius {
            (radius - dist) / edge
        } else {
            0.0
        };

        pixel[3] = (pixel[3] as f32 * coverage) as u8;
    }

    DynamicImage::ImageRgba8(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use image::GenericImageView;

    #[test]
    fn test_cover_fit_is_exact_and_square() {
        let img = image::load_from_memory(&fixtures::png_rgba_300x500()).unwrap();
        let icon = render_cover(&img, 100);
        assert_eq!(icon.dimensions(), (100, 100));
    }

    #[test]
    fn test_cover_fit_never_letterboxes() {
        // An opaque non-square source must stay opaque everywhere: a
        // contain/pad resize would leave transparent bands top and bottom.
        let img = image::load_from_memory(&fixtures::png_rgba_300x500()).unwrap();
        let icon = render_cover(&img, 64).to_rgba8();
        for pixel in icon.pixels() {
            assert_eq!(pixel[3], 255);
        }
    }

    #[test]
    fn test_upscale_hits_exact_size() {
        let img = image::load_from_memory(&fixtures::jpeg_rgb_512()).unwrap();
        let icon = render_cover(&img, 1024);
        assert_eq!(icon.dimensions(), (1024, 1024));
    }

    #[test]
    fn test_encode_png_round_trips() {
        let img = image::load_from_memory(&fixtures::png_rgba_1024()).unwrap();
        let icon = render_cover(&img, 64);
        let bytes = encode_png(&icon).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (64, 64));
    }

    #[test]
    fn test_round_mask_clears_corners_keeps_center() {
        let img = image::load_from_memory(&fixtures::png_rgba_1024()).unwrap();
        let icon = render_cover(&img, 96);
        let round = apply_round_mask(&icon).to_rgba8();

        assert_eq!(round.dimensions(), (96, 96));
        // Corners fall outside the circle
        assert_eq!(round.get_pixel(0, 0)[3], 0);
        assert_eq!(round.get_pixel(95, 0)[3], 0);
        assert_eq!(round.get_pixel(0, 95)[3], 0);
        assert_eq!(round.get_pixel(95, 95)[3], 0);
        // Center stays opaque
        assert_eq!(round.get_pixel(48, 48)[3], 255);
    }
}
