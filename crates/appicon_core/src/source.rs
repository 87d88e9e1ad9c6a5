//! Source image loading and validation
//!
//! A [`SourceImage`] is the immutable input of a generation run: the decoded
//! pixels plus the detected container format. Construction fails with
//! [`IconError::InvalidImage`] when the bytes cannot be decoded, so an
//! unusable source never reaches the filesystem-writing stages.

use crate::{IconError, RECOMMENDED_SOURCE_SIZE};
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Immutable source image for a generation run
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

/// Advisory report about a source image
///
/// Nothing in here is fatal: an undecodable source already failed at
/// [`SourceImage`] construction. The warnings are surfaced to the user but
/// never block generation.
#[derive(Debug, Clone)]
pub struct SourceValidation {
    pub width: u32,
    pub height: u32,
    pub is_square: bool,
    pub meets_recommended: bool,
    pub has_transparency: bool,
    pub warnings: Vec<String>,
}

impl SourceImage {
    /// Decode a source image from raw bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, IconError> {
        let format = image::guess_format(data).ok();
        let image = image::load_from_memory(data).map_err(|e| {
            IconError::invalid_image(format!("failed to decode source image: {}", e))
        })?;

        debug!(
            width = image.width(),
            height = image.height(),
            format = ?format,
            "source image decoded"
        );

        Ok(Self { image, format })
    }

    /// Read and decode a source image from a file
    pub fn from_path(path: &Path) -> Result<Self, IconError> {
        let data = fs::read(path)
            .map_err(|e| IconError::io(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_bytes(&data)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn min_dimension(&self) -> u32 {
        self.width().min(self.height())
    }

    /// Whether the source is below the recommended 1024px floor
    pub fn low_resolution(&self) -> bool {
        self.min_dimension() < RECOMMENDED_SOURCE_SIZE
    }

    pub fn has_transparency(&self) -> bool {
        matches!(
            self.image,
            DynamicImage::ImageRgba8(_)
                | DynamicImage::ImageRgba16(_)
                | DynamicImage::ImageLumaA8(_)
                | DynamicImage::ImageLumaA16(_)
        )
    }

    /// Short name of the detected container format ("png", "jpeg", ...)
    pub fn format_name(&self) -> &'static str {
        match self.format {
            Some(ImageFormat::Png) => "png",
            Some(ImageFormat::Jpeg) => "jpeg",
            Some(_) => "image",
            None => "unknown",
        }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Produce an advisory validation report
    pub fn validate(&self) -> SourceValidation {
        let width = self.width();
        let height = self.height();
        let is_square = width == height;
        let meets_recommended = !self.low_resolution();
        let has_transparency = self.has_transparency();

        let mut warnings = Vec::new();

        if !meets_recommended {
            warnings.push(low_resolution_warning(width, height));
        }

        if !has_transparency {
            warnings.push(
                "Source image does not have an alpha channel. Consider using PNG with transparency."
                    .to_string(),
            );
        }

        SourceValidation {
            width,
            height,
            is_square,
            meets_recommended,
            has_transparency,
            warnings,
        }
    }
}

/// Shared wording for the low-resolution advisory
pub(crate) fn low_resolution_warning(width: u32, height: u32) -> String {
    format!(
        "Source image is {}x{}. Recommended minimum is {}x{} for best quality.",
        width, height, RECOMMENDED_SOURCE_SIZE, RECOMMENDED_SOURCE_SIZE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::IconErrorCode;

    #[test]
    fn test_invalid_bytes_are_rejected() {
        let err = SourceImage::from_bytes(&fixtures::invalid_image_data()).unwrap_err();
        match err {
            IconError::InvalidImage { code, .. } => {
                assert_eq!(code, IconErrorCode::InvalidImage as u32);
            }
            other => panic!("expected InvalidImage, got {:?}", other),
        }
    }

    #[test]
    fn test_png_source_decodes() {
        let source = SourceImage::from_bytes(&fixtures::png_rgba_1024()).unwrap();
        assert_eq!(source.width(), 1024);
        assert_eq!(source.height(), 1024);
        assert_eq!(source.format_name(), "png");
        assert!(source.has_transparency());
    }

    #[test]
    fn test_jpeg_source_decodes() {
        let source = SourceImage::from_bytes(&fixtures::jpeg_rgb_512()).unwrap();
        assert_eq!(source.width(), 512);
        assert_eq!(source.format_name(), "jpeg");
        assert!(!source.has_transparency());
    }

    #[test]
    fn test_resolution_boundary() {
        let source = SourceImage::from_bytes(&fixtures::png_rgba_1024()).unwrap();
        assert!(!source.low_resolution());

        let source = SourceImage::from_bytes(&fixtures::png_rgba_1023()).unwrap();
        assert!(source.low_resolution());
    }

    #[test]
    fn test_validation_report() {
        let source = SourceImage::from_bytes(&fixtures::jpeg_rgb_512()).unwrap();
        let validation = source.validate();
        assert!(validation.is_square);
        assert!(!validation.meets_recommended);
        assert!(!validation.has_transparency);
        // Low resolution plus missing alpha channel
        assert_eq!(validation.warnings.len(), 2);

        let source = SourceImage::from_bytes(&fixtures::png_rgba_1024()).unwrap();
        let validation = source.validate();
        assert!(validation.meets_recommended);
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_non_square_source_is_accepted() {
        let source = SourceImage::from_bytes(&fixtures::png_rgba_300x500()).unwrap();
        assert_eq!(source.min_dimension(), 300);
        assert!(!source.validate().is_square);
    }
}
