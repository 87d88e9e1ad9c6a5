//! Test fixtures for appicon_core
//!
//! In-memory generated source images for unit tests.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Fixture sizes around the recommended source floor
pub mod sizes {
    pub const RECOMMENDED: u32 = 1024;
    pub const JUST_UNDER: u32 = 1023;
    pub const LARGE: u32 = 2048;
    pub const SMALL: u32 = 512;
}

/// Opaque RGBA PNG at the recommended source size
pub fn png_rgba_1024() -> Vec<u8> {
    png_rgba_square(sizes::RECOMMENDED)
}

/// Opaque RGBA PNG one pixel under the recommended floor
pub fn png_rgba_1023() -> Vec<u8> {
    png_rgba_square(sizes::JUST_UNDER)
}

/// Opaque RGBA PNG well above the recommended floor
pub fn png_rgba_2048() -> Vec<u8> {
    png_rgba_square(sizes::LARGE)
}

/// Square RGB JPEG below the recommended floor, no alpha channel
pub fn jpeg_rgb_512() -> Vec<u8> {
    let mut img = RgbImage::new(sizes::SMALL, sizes::SMALL);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x / 2) as u8, (y / 2) as u8, 128]);
    }

    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");
    buffer
}

/// Non-square opaque PNG for cover-fit tests
pub fn png_rgba_300x500() -> Vec<u8> {
    let mut img = RgbaImage::new(300, 500);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgba([x as u8, y as u8, 200, 255]);
    }
    encode_png_rgba(&img)
}

/// Bytes no decoder accepts
pub fn invalid_image_data() -> Vec<u8> {
    vec![0, 1, 2, 3, 4, 5]
}

fn png_rgba_square(size: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Simple gradient, fully opaque
        *pixel = Rgba([(x / 8) as u8, (y / 8) as u8, 160, 255]);
    }
    encode_png_rgba(&img)
}

// Helper to encode an RGBA image to PNG bytes
fn encode_png_rgba(img: &RgbaImage) -> Vec<u8> {
    let mut buffer = Vec::new();
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid_images() {
        let fixtures = [
            ("png_rgba_1024", png_rgba_1024()),
            ("png_rgba_1023", png_rgba_1023()),
            ("png_rgba_2048", png_rgba_2048()),
            ("jpeg_rgb_512", jpeg_rgb_512()),
            ("png_rgba_300x500", png_rgba_300x500()),
        ];

        for (name, data) in fixtures {
            let result = image::load_from_memory(&data);
            assert!(result.is_ok(), "Fixture {} failed to load", name);
        }
    }

    #[test]
    fn test_fixtures_have_correct_dimensions() {
        let img = image::load_from_memory(&png_rgba_1024()).unwrap();
        assert_eq!((img.width(), img.height()), (1024, 1024));

        let img = image::load_from_memory(&png_rgba_1023()).unwrap();
        assert_eq!((img.width(), img.height()), (1023, 1023));

        let img = image::load_from_memory(&jpeg_rgb_512()).unwrap();
        assert_eq!((img.width(), img.height()), (512, 512));

        let img = image::load_from_memory(&png_rgba_300x500()).unwrap();
        assert_eq!((img.width(), img.height()), (300, 500));
    }

    #[test]
    fn test_invalid_data_does_not_decode() {
        assert!(image::load_from_memory(&invalid_image_data()).is_err());
    }
}
