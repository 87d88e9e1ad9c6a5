//! Icon Set Builder - one source image in, the full asset tree out
//!
//! The run is strictly sequential: later catalog entries may reuse a file
//! produced earlier in the same run (pixel-size deduplication), so each
//! render-and-write completes before the next begins. Independent runs into
//! distinct output directories share nothing and may execute in parallel.
//!
//! Failure semantics: any single resize/encode/write failure aborts the
//! whole run and surfaces the originating error with the platform and pixel
//! size being produced. Partially written files are the caller's to discard;
//! this module never cleans up after itself.

use crate::catalog::IconCatalog;
use crate::manifest;
use crate::render;
use crate::source::{low_resolution_warning, SourceImage};
use crate::{
    GenerateOptions, IconError, IconSet, Platform, PlatformSelection, RenderedIcon,
    APP_STORE_SIZE, PLAY_STORE_SIZE,
};
use image::DynamicImage;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Asset-catalog directory inside the output root
pub const IOS_ASSET_DIR: &str = "Assets.xcassets/AppIcon.appiconset";
/// Directory holding the Android density buckets
pub const ANDROID_DIR: &str = "android";
/// Conventional Android launcher filename
pub const ANDROID_LAUNCHER: &str = "ic_launcher.png";
/// Round-variant launcher filename
pub const ANDROID_LAUNCHER_ROUND: &str = "ic_launcher_round.png";
/// App Store marketing icon at the output root
pub const APP_STORE_ICON: &str = "appstore.png";
/// Play Store marketing icon at the output root
pub const PLAY_STORE_ICON: &str = "playstore.png";

/// Generate the full icon set for the selected platforms
///
/// Fails with a validation error before any write when no platform is
/// selected. A low-resolution source is a warning on the returned set, not
/// an error.
pub fn generate(
    source: &SourceImage,
    selection: PlatformSelection,
    output_dir: &Path,
    catalog: &IconCatalog,
    options: GenerateOptions,
) -> Result<IconSet, IconError> {
    if selection.is_empty() {
        return Err(IconError::validation(
            "no platform selected. Use \"ios\" and/or \"android\"",
        ));
    }

    debug!(
        width = source.width(),
        height = source.height(),
        format = source.format_name(),
        ios = selection.ios,
        android = selection.android,
        "starting icon generation"
    );

    let mut set = IconSet::default();

    if source.low_resolution() {
        let warning = low_resolution_warning(source.width(), source.height());
        warn!("{}", warning);
        set.warnings.push(warning);
    }

    if selection.ios {
        generate_ios(source, output_dir, catalog, &mut set)?;
    }

    if selection.android {
        generate_android(source, output_dir, catalog, options, &mut set)?;
    }

    debug!(icons = set.icons.len(), "icon set complete");
    Ok(set)
}

/// Render the Xcode asset catalog plus the root-level App Store icon
fn generate_ios(
    source: &SourceImage,
    output_dir: &Path,
    catalog: &IconCatalog,
    set: &mut IconSet,
) -> Result<(), IconError> {
    let asset_dir = output_dir.join(IOS_ASSET_DIR);
    fs::create_dir_all(&asset_dir)
        .map_err(|e| IconError::io(format!("failed to create {}: {}", asset_dir.display(), e)))?;

    // One physical file per distinct pixel size this run
    let mut rendered: BTreeSet<u32> = BTreeSet::new();

    for &size in &catalog.ios_sizes {
        if !rendered.insert(size) {
            continue;
        }

        let filename = format!("{}.png", size);
        let icon = render::render_cover(source.image(), size);
        write_icon(&icon, &asset_dir.join(&filename), Platform::Ios, size)?;

        set.icons.push(RenderedIcon {
            filename: format!("{}/{}", IOS_ASSET_DIR, filename),
            pixel_size: size,
            platform: Platform::Ios,
            density: None,
        });
    }

    manifest::write_contents_json(&asset_dir, &catalog.ios_slots)?;

    let appstore = render::render_cover(source.image(), APP_STORE_SIZE);
    write_icon(
        &appstore,
        &output_dir.join(APP_STORE_ICON),
        Platform::Ios,
        APP_STORE_SIZE,
    )?;
    set.icons.push(RenderedIcon {
        filename: APP_STORE_ICON.to_string(),
        pixel_size: APP_STORE_SIZE,
        platform: Platform::Ios,
        density: None,
    });

    debug!(
        files = rendered.len() + 1,
        "ios asset catalog complete"
    );
    Ok(())
}

/// Render the density-bucket launchers plus the root-level Play Store icon
fn generate_android(
    source: &SourceImage,
    output_dir: &Path,
    catalog: &IconCatalog,
    options: GenerateOptions,
    set: &mut IconSet,
) -> Result<(), IconError> {
    let android_dir = output_dir.join(ANDROID_DIR);
    fs::create_dir_all(&android_dir)
        .map_err(|e| IconError::io(format!("failed to create {}: {}", android_dir.display(), e)))?;

    for density in &catalog.android {
        let bucket_dir = android_dir.join(density.folder);
        fs::create_dir_all(&bucket_dir).map_err(|e| {
            IconError::io(format!("failed to create {}: {}", bucket_dir.display(), e))
        })?;

        let icon = render::render_cover(source.image(), density.pixel_size);
        write_icon(
            &icon,
            &bucket_dir.join(ANDROID_LAUNCHER),
            Platform::Android,
            density.pixel_size,
        )?;
        set.icons.push(RenderedIcon {
            filename: format!("{}/{}/{}", ANDROID_DIR, density.folder, ANDROID_LAUNCHER),
            pixel_size: density.pixel_size,
            platform: Platform::Android,
            density: Some(density.density.to_string()),
        });

        if options.round_icons {
            let round = render::apply_round_mask(&icon);
            write_icon(
                &round,
                &bucket_dir.join(ANDROID_LAUNCHER_ROUND),
                Platform::Android,
                density.pixel_size,
            )?;
            set.icons.push(RenderedIcon {
                filename: format!(
                    "{}/{}/{}",
                    ANDROID_DIR, density.folder, ANDROID_LAUNCHER_ROUND
                ),
                pixel_size: density.pixel_size,
                platform: Platform::Android,
                density: Some(density.density.to_string()),
            });
        }
    }

    let playstore = render::render_cover(source.image(), PLAY_STORE_SIZE);
    write_icon(
        &playstore,
        &output_dir.join(PLAY_STORE_ICON),
        Platform::Android,
        PLAY_STORE_SIZE,
    )?;
    set.icons.push(RenderedIcon {
        filename: PLAY_STORE_ICON.to_string(),
        pixel_size: PLAY_STORE_SIZE,
        platform: Platform::Android,
        density: None,
    });

    debug!(buckets = catalog.android.len(), "android icons complete");
    Ok(())
}

/// Encode and write one icon, attributing failures to the step producing it
fn write_icon(
    icon: &DynamicImage,
    dest: &Path,
    platform: Platform,
    size: u32,
) -> Result<(), IconError> {
    let bytes = render::encode_png(icon)?;
    fs::write(dest, &bytes).map_err(|e| {
        IconError::render(format!(
            "{} {}x{} ({}): {}",
            platform,
            size,
            size,
            dest.display(),
            e
        ))
    })
}
