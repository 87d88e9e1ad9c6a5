//! Xcode asset-catalog descriptor (`Contents.json`)
//!
//! The descriptor enumerates logical requirements, not physical files: one
//! entry per (idiom, scale, role?, subtype?) slot, so a filename appears in
//! several entries whenever slots share a pixel size. Xcode matches entries
//! by these fields - the schema must stay structurally exact even though
//! formatting is free.

use crate::catalog::IosSlot;
use crate::IconError;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Descriptor filename inside the appiconset directory
pub const CONTENTS_JSON: &str = "Contents.json";
/// `folder` value every entry carries, relative to the bundle root
pub const ASSET_FOLDER: &str = "Assets.xcassets/AppIcon.appiconset/";

/// One image entry in the asset-catalog descriptor
#[derive(Debug, Clone, Serialize)]
pub struct AssetImage {
    /// Logical point size as "WxH"
    pub size: String,
    /// Physical pixel size of the referenced file, as a string
    #[serde(rename = "expected-size")]
    pub expected_size: String,
    pub filename: String,
    pub folder: String,
    pub idiom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub scale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AssetImage {
    fn from_slot(slot: &IosSlot) -> Self {
        Self {
            size: slot.size_pt.to_string(),
            expected_size: slot.pixel_size.to_string(),
            filename: slot.filename(),
            folder: ASSET_FOLDER.to_string(),
            idiom: slot.idiom.to_string(),
            subtype: slot.subtype.map(str::to_string),
            scale: slot.scale.to_string(),
            role: slot.role.map(str::to_string),
        }
    }
}

/// The full asset-catalog descriptor
#[derive(Debug, Clone, Serialize)]
pub struct AssetCatalog {
    pub images: Vec<AssetImage>,
}

impl AssetCatalog {
    pub fn from_slots(slots: &[IosSlot]) -> Self {
        Self {
            images: slots.iter().map(AssetImage::from_slot).collect(),
        }
    }
}

/// Write `Contents.json` into the appiconset directory
pub fn write_contents_json(asset_dir: &Path, slots: &[IosSlot]) -> Result<(), IconError> {
    let catalog = AssetCatalog::from_slots(slots);
    let json = serde_json::to_string_pretty(&catalog)
        .map_err(|e| IconError::manifest(format!("failed to serialize {}: {}", CONTENTS_JSON, e)))?;

    let path = asset_dir.join(CONTENTS_JSON);
    fs::write(&path, json)
        .map_err(|e| IconError::io(format!("failed to write {}: {}", path.display(), e)))?;

    debug!(entries = slots.len(), "wrote asset-catalog descriptor");
    Ok(())
}
