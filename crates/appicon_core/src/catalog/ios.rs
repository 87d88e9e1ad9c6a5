//! iOS size and slot tables
//!
//! `IOS_SIZES` lists every distinct pixel size the builder renders, one file
//! per entry. `IOS_SLOTS` lists every logical slot the asset catalog
//! declares; several slots point at the same file (e.g. one 80px render
//! serves iphone 40pt@2x, ipad 40pt@2x and the 38mm watch launcher).

/// One logical slot in the Xcode asset catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosSlot {
    /// UI context: "iphone", "ipad", "watch", "mac", "ios-marketing", ...
    pub idiom: &'static str,
    /// Logical point size as a "WxH" string, fractional points allowed
    pub size_pt: &'static str,
    /// Display scale: "1x", "2x" or "3x"
    pub scale: &'static str,
    /// Physical pixel size of the file satisfying this slot
    pub pixel_size: u32,
    /// Watch-specific purpose, where applicable
    pub role: Option<&'static str>,
    /// Watch case size, where applicable
    pub subtype: Option<&'static str>,
}

impl IosSlot {
    /// Filename of the pixel-keyed file satisfying this slot
    pub fn filename(&self) -> String {
        format!("{}.png", self.pixel_size)
    }
}

/// Distinct iOS pixel sizes, in output order
pub const IOS_SIZES: &[u32] = &[
    // iPhone (current + legacy)
    180, // @3x 60pt
    120, // @2x 60pt & @3x 40pt
    114, // @2x 57pt (legacy)
    87,  // @3x 29pt
    80,  // @2x 40pt & Watch 38mm launcher
    60,  // @3x 20pt
    58,  // @2x 29pt
    57,  // @1x 57pt (legacy)
    40,  // @2x 20pt & iPad @1x 40pt
    29,  // @1x 29pt
    // iPad
    167, // Pro @2x 83.5pt
    152, // @2x 76pt
    144, // @2x 72pt (legacy)
    100, // @2x 50pt (legacy) & Watch 44mm launcher
    76,  // @1x 76pt
    72,  // @1x 72pt (legacy)
    50,  // @1x 50pt (legacy)
    20,  // @1x 20pt
    // Apple Watch
    258, // 49mm quick look
    234, // 45mm quick look
    216, // 44mm quick look
    196, // 42mm quick look
    172, // 38mm quick look
    108, // 49mm launcher
    102, // 45mm launcher
    92,  // 41mm launcher
    88,  // 40mm launcher
    66,  // 45mm notification
    55,  // 42mm notification
    48,  // 38mm notification
    // macOS
    512,
    256,
    128,
    64,
    32,
    16,
    // Marketing
    1024,
];

/// Every logical slot the generated `Contents.json` declares
pub const IOS_SLOTS: &[IosSlot] = &[
    // iPhone
    slot("iphone", "60x60", "3x", 180),
    slot("iphone", "40x40", "2x", 80),
    slot("iphone", "40x40", "3x", 120),
    slot("iphone", "60x60", "2x", 120),
    slot("iphone", "57x57", "1x", 57),
    slot("iphone", "29x29", "2x", 58),
    slot("iphone", "29x29", "1x", 29),
    slot("iphone", "29x29", "3x", 87),
    slot("iphone", "57x57", "2x", 114),
    slot("iphone", "20x20", "2x", 40),
    slot("iphone", "20x20", "3x", 60),
    slot("ios-marketing", "1024x1024", "1x", 1024),
    // iPad
    slot("ipad", "40x40", "2x", 80),
    slot("ipad", "72x72", "1x", 72),
    slot("ipad", "76x76", "2x", 152),
    slot("ipad", "50x50", "2x", 100),
    slot("ipad", "29x29", "2x", 58),
    slot("ipad", "76x76", "1x", 76),
    slot("ipad", "29x29", "1x", 29),
    slot("ipad", "50x50", "1x", 50),
    slot("ipad", "72x72", "2x", 144),
    slot("ipad", "40x40", "1x", 40),
    slot("ipad", "83.5x83.5", "2x", 167),
    slot("ipad", "20x20", "1x", 20),
    slot("ipad", "20x20", "2x", 40),
    // Apple Watch
    watch_slot("86x86", "2x", 172, "quickLook", "38mm"),
    watch_slot("40x40", "2x", 80, "appLauncher", "38mm"),
    watch_slot("44x44", "2x", 88, "appLauncher", "40mm"),
    watch_slot("51x51", "2x", 102, "appLauncher", "45mm"),
    watch_slot("54x54", "2x", 108, "appLauncher", "49mm"),
    watch_slot("46x46", "2x", 92, "appLauncher", "41mm"),
    watch_slot("50x50", "2x", 100, "appLauncher", "44mm"),
    watch_slot("98x98", "2x", 196, "quickLook", "42mm"),
    watch_slot("108x108", "2x", 216, "quickLook", "44mm"),
    watch_slot("117x117", "2x", 234, "quickLook", "45mm"),
    watch_slot("129x129", "2x", 258, "quickLook", "49mm"),
    watch_slot("24x24", "2x", 48, "notificationCenter", "38mm"),
    watch_slot("27.5x27.5", "2x", 55, "notificationCenter", "42mm"),
    watch_slot("33x33", "2x", 66, "notificationCenter", "45mm"),
    companion_slot("29x29", "3x", 87),
    companion_slot("29x29", "2x", 58),
    slot("watch-marketing", "1024x1024", "1x", 1024),
    // macOS
    slot("mac", "128x128", "1x", 128),
    slot("mac", "256x256", "1x", 256),
    slot("mac", "128x128", "2x", 256),
    slot("mac", "256x256", "2x", 512),
    slot("mac", "32x32", "1x", 32),
    slot("mac", "512x512", "1x", 512),
    slot("mac", "16x16", "1x", 16),
    slot("mac", "16x16", "2x", 32),
    slot("mac", "32x32", "2x", 64),
    slot("mac", "512x512", "2x", 1024),
];

const fn slot(
    idiom: &'static str,
    size_pt: &'static str,
    scale: &'static str,
    pixel_size: u32,
) -> IosSlot {
    IosSlot {
        idiom,
        size_pt,
        scale,
        pixel_size,
        role: None,
        subtype: None,
    }
}

const fn watch_slot(
    size_pt: &'static str,
    scale: &'static str,
    pixel_size: u32,
    role: &'static str,
    subtype: &'static str,
) -> IosSlot {
    IosSlot {
        idiom: "watch",
        size_pt,
        scale,
        pixel_size,
        role: Some(role),
        subtype: Some(subtype),
    }
}

/// Watch companion-settings slots carry a role but no case subtype
const fn companion_slot(size_pt: &'static str, scale: &'static str, pixel_size: u32) -> IosSlot {
    IosSlot {
        idiom: "watch",
        size_pt,
        scale,
        pixel_size,
        role: Some("companionSettings"),
        subtype: None,
    }
}
