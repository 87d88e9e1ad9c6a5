//! Size catalogs for iOS and Android icon generation
//!
//! Pure data. The iOS catalog follows the Xcode asset-catalog convention:
//! one physical PNG per distinct pixel size (named `<px>.png`), plus a slot
//! table mapping every logical (idiom, point-size, scale, role) combination
//! onto those shared files. The two tables are deliberately separate - the
//! slot table is strictly larger than the size table because several logical
//! slots share one pixel size.
//!
//! The Android catalog uses a 48px logical baseline at mdpi; every other
//! density bucket derives its pixel size from the baseline and the bucket's
//! scale factor.

pub mod android;
pub mod ios;

pub use android::{AndroidDensity, ANDROID_BASE_SIZE, ANDROID_DENSITIES};
pub use ios::{IosSlot, IOS_SIZES, IOS_SLOTS};

/// The size tables driving one generation run
///
/// Injected into [`crate::builder::generate`] rather than read from module
/// globals, so alternate catalogs (tests, future platforms) need no builder
/// changes.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    /// Distinct iOS pixel sizes, in output order
    pub ios_sizes: Vec<u32>,
    /// Logical asset-catalog slots, in `Contents.json` order
    pub ios_slots: Vec<IosSlot>,
    /// Android density buckets, smallest to largest
    pub android: Vec<AndroidDensity>,
}

impl IconCatalog {
    /// The canonical catalog: every current and legacy iOS slot plus the
    /// five Android density buckets.
    pub fn standard() -> Self {
        Self {
            ios_sizes: IOS_SIZES.to_vec(),
            ios_slots: IOS_SLOTS.to_vec(),
            android: ANDROID_DENSITIES.to_vec(),
        }
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
