//! Android density-bucket table
//!
//! The launcher icon's logical size is 48px at the mdpi baseline; every
//! other bucket is the baseline multiplied by the bucket's scale factor.
//! ldpi is omitted - modern toolchains downscale from mdpi for the few
//! devices that still report it.

/// One Android density bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AndroidDensity {
    /// Bucket name as used in resource qualifiers
    pub density: &'static str,
    /// Multiplier relative to the mdpi baseline
    pub scale_factor: f32,
    /// Launcher icon pixel size for this bucket
    pub pixel_size: u32,
    /// Resource folder name under the android output root
    pub folder: &'static str,
}

/// Launcher icon baseline size at mdpi
pub const ANDROID_BASE_SIZE: u32 = 48;

/// Density buckets, smallest to largest
pub const ANDROID_DENSITIES: &[AndroidDensity] = &[
    AndroidDensity {
        density: "mdpi",
        scale_factor: 1.0,
        pixel_size: 48,
        folder: "mipmap-mdpi",
    },
    AndroidDensity {
        density: "hdpi",
        scale_factor: 1.5,
        pixel_size: 72,
        folder: "mipmap-hdpi",
    },
    AndroidDensity {
        density: "xhdpi",
        scale_factor: 2.0,
        pixel_size: 96,
        folder: "mipmap-xhdpi",
    },
    AndroidDensity {
        density: "xxhdpi",
        scale_factor: 3.0,
        pixel_size: 144,
        folder: "mipmap-xxhdpi",
    },
    AndroidDensity {
        density: "xxxhdpi",
        scale_factor: 4.0,
        pixel_size: 192,
        folder: "mipmap-xxxhdpi",
    },
];
