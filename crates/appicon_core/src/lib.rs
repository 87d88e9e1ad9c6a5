//! appicon_core - iOS and Android app icon set generation
//!
//! Turns one source image into the complete per-platform icon asset matrix:
//! - iOS: an Xcode asset catalog (`AppIcon.appiconset` with `Contents.json`)
//! - Android: density-bucketed `mipmap-*` launcher icons
//! - Store marketing icons (`appstore.png`, `playstore.png`)
//!
//! The size tables live in [`catalog`], the resize primitive in [`render`],
//! the generation pipeline in [`builder`] and the asset-catalog descriptor in
//! [`manifest`]. A generation run is a pure function of (source, selection,
//! catalog, options) - no state survives between runs.

use serde::Serialize;
use std::fmt;

pub mod builder;
pub mod catalog;
pub mod manifest;
pub mod render;
pub mod source;

// Test fixtures
#[cfg(test)]
pub mod fixtures;

pub use builder::generate;
pub use catalog::IconCatalog;
pub use source::{SourceImage, SourceValidation};

/// Minimum source edge length below which a quality warning is emitted
pub const RECOMMENDED_SOURCE_SIZE: u32 = 1024;
/// Pixel size of the App Store marketing icon
pub const APP_STORE_SIZE: u32 = 1024;
/// Pixel size of the Play Store marketing icon
pub const PLAY_STORE_SIZE: u32 = 512;

// ============================================================================
// Error Types
// ============================================================================

/// Error code range: 7200-7299
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum IconErrorCode {
    /// Source image could not be decoded
    InvalidImage = 7200,
    /// Platform selection was empty or unrecognized
    Validation = 7201,
    /// A resize/encode/write step failed
    RenderError = 7202,
    /// IO error outside the render path
    IoError = 7203,
    /// Manifest serialization failed
    ManifestError = 7204,
}

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("[{code}] Invalid image: {message}")]
    InvalidImage { code: u32, message: String },

    #[error("[{code}] Validation error: {message}")]
    Validation { code: u32, message: String },

    #[error("[{code}] Render error: {message}")]
    Render { code: u32, message: String },

    #[error("[{code}] IO error: {message}")]
    Io { code: u32, message: String },

    #[error("[{code}] Manifest error: {message}")]
    Manifest { code: u32, message: String },
}

impl IconError {
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            code: IconErrorCode::InvalidImage as u32,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: IconErrorCode::Validation as u32,
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            code: IconErrorCode::RenderError as u32,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            code: IconErrorCode::IoError as u32,
            message: message.into(),
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            code: IconErrorCode::ManifestError as u32,
            message: message.into(),
        }
    }
}

// ============================================================================
// Types
// ============================================================================

/// Platform an icon asset belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "ios"),
            Platform::Android => write!(f, "android"),
        }
    }
}

/// Which platforms a generation run should produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformSelection {
    pub ios: bool,
    pub android: bool,
}

impl PlatformSelection {
    pub const fn ios() -> Self {
        Self {
            ios: true,
            android: false,
        }
    }

    pub const fn android() -> Self {
        Self {
            ios: false,
            android: true,
        }
    }

    pub const fn both() -> Self {
        Self {
            ios: true,
            android: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.ios && !self.android
    }

    /// Parse a comma-separated platform list, e.g. `"ios,android"`.
    /// Unknown names and empty selections are validation errors.
    pub fn parse(list: &str) -> Result<Self, IconError> {
        let mut selection = Self::default();

        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "ios" => selection.ios = true,
                "android" => selection.android = true,
                other => {
                    return Err(IconError::validation(format!(
                        "unknown platform \"{}\". Use \"ios\" and/or \"android\"",
                        other
                    )));
                }
            }
        }

        if selection.is_empty() {
            return Err(IconError::validation(
                "no platform selected. Use \"ios\" and/or \"android\"",
            ));
        }

        Ok(selection)
    }
}

/// One produced artifact. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedIcon {
    /// Path relative to the output root
    pub filename: String,
    pub pixel_size: u32,
    pub platform: Platform,
    /// Android density bucket, where applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
}

/// Aggregate result of one generation run
#[derive(Debug, Default, Serialize)]
pub struct IconSet {
    pub icons: Vec<RenderedIcon>,
    /// Non-fatal advisories (e.g. low source resolution)
    pub warnings: Vec<String>,
}

impl IconSet {
    pub fn platform_icons(&self, platform: Platform) -> impl Iterator<Item = &RenderedIcon> {
        self.icons.iter().filter(move |i| i.platform == platform)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Options for a generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Also emit circular-masked `ic_launcher_round.png` variants for Android
    pub round_icons: bool,
}
