//! ZIP export of a generated icon tree

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// Archive a directory tree into a deflate-compressed ZIP file
///
/// Entry names are relative to `source_dir`, with forward slashes on every
/// platform so the archive unpacks identically everywhere.
pub fn zip_dir(source_dir: &Path, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(source_dir) {
        let entry = entry?;
        let path = entry.path();
        let relative = path.strip_prefix(source_dir)?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let name = relative.to_string_lossy().replace('\\', "/");
        if path.is_file() {
            zip.start_file(&name, options)?;

            let mut f = File::open(path)?;
            let mut buffer = Vec::new();
            f.read_to_end(&mut buffer)?;
            zip.write_all(&buffer)?;
        } else if path.is_dir() {
            zip.add_directory(format!("{}/", name), options)?;
        }
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_zip_round_trip() {
        let dir = temp_dir().join("appicon_zip_round_trip");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("android/mipmap-mdpi")).unwrap();
        fs::write(dir.join("appstore.png"), b"not a real png").unwrap();
        fs::write(
            dir.join("android/mipmap-mdpi/ic_launcher.png"),
            b"also not a real png",
        )
        .unwrap();

        let zip_path = dir.with_extension("zip");
        zip_dir(&dir, &zip_path).unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"appstore.png".to_string()));
        assert!(names.contains(&"android/mipmap-mdpi/ic_launcher.png".to_string()));

        let mut entry = archive.by_name("appstore.png").unwrap();
        let mut contents = Vec::new();
        entry.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"not a real png");

        let _ = fs::remove_dir_all(&dir);
        let _ = fs::remove_file(&zip_path);
    }
}
