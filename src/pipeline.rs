use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, StripError};
use crate::exif::{ImageFile, Tag};
use crate::fields::FieldGroup;
use crate::strip::strip_metadata;

/// Image containers the stripper can rewrite, by file extension.
///
/// Only used to filter directory walks; files named explicitly are sniffed by
/// content instead.
///
/// # Example
///
/// ```rust
/// use exif_stripper::pipeline::ImageKind;
/// use std::path::Path;
///
/// assert_eq!(ImageKind::from_path(Path::new("photo.JPG")), Some(ImageKind::Jpeg));
/// assert_eq!(ImageKind::from_path(Path::new("scan.tiff")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageKind {
    /// JPEG — EXIF in the APP1 segment
    Jpeg,
    /// PNG — EXIF in the eXIf chunk
    Png,
    /// WebP — EXIF chunk in the RIFF container
    WebP,
}

impl ImageKind {
    /// Determine the image kind from a file path extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }
}

/// What to strip, and whether to actually write.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub fields: Vec<FieldGroup>,
    /// Report what would change without touching any file.
    pub dry_run: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            fields: vec![FieldGroup::All],
            dry_run: false,
        }
    }
}

/// The outcome of processing one file.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    pub path: PathBuf,
    /// Whether metadata was stripped (or would have been, in a dry run).
    pub changed: bool,
    /// Top-level tags present before stripping and absent after.
    pub removed_tags: Vec<Tag>,
}

impl ProcessResult {
    fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            changed: false,
            removed_tags: Vec::new(),
        }
    }
}

/// Collect the files to process from the given paths.
///
/// Files are kept as given, whatever their extension; the driver skips
/// anything that is not an image. Directories are walked recursively and only
/// files with a rewritable image extension are kept.
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut images = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && ImageKind::from_path(p).is_some() {
                    images.push(p.to_path_buf());
                }
            }
        } else {
            images.push(path.clone());
        }
    }

    images
}

/// Strip the requested field groups from one image file.
///
/// Missing files, non-images, images without EXIF and images whose EXIF
/// cannot be decoded all come back unchanged. Only a failure to write the
/// stripped file back is returned as an error.
pub fn process_image(path: &Path, options: &ProcessOptions) -> Result<ProcessResult> {
    let mut result = ProcessResult::unchanged(path);

    let mut image = match ImageFile::open(path) {
        Ok(Some(image)) => image,
        Ok(None) => return Ok(result),
        Err(StripError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Path does not exist: {}", path.display());
            return Ok(result);
        }
        Err(e) => {
            log::debug!("Skipping {}: {e}", path.display());
            return Ok(result);
        }
    };

    if image.metadata().is_empty() {
        return Ok(result);
    }

    let before = image.metadata().clone();
    if !strip_metadata(image.metadata_mut(), &options.fields) {
        return Ok(result);
    }

    result.changed = true;
    result.removed_tags = before
        .tags()
        .filter(|tag| !image.metadata().contains(*tag))
        .collect();

    if options.dry_run {
        log::info!("Would strip EXIF metadata from {}", path.display());
    } else {
        image.save()?;
        log::info!("Stripped EXIF metadata from {}", path.display());
    }

    Ok(result)
}

/// Process files one after another, stopping at the first write failure.
pub fn process_images(paths: &[PathBuf], options: &ProcessOptions) -> Result<Vec<ProcessResult>> {
    paths
        .iter()
        .map(|path| process_image(path, options))
        .collect()
}

/// Whether any file had metadata stripped.
pub fn any_changed(results: &[ProcessResult]) -> bool {
    results.iter().any(|r| r.changed)
}
