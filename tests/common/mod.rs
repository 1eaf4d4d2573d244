use assert_cmd::{Command, cargo::cargo_bin_cmd};
use exif_stripper::exif::tags::*;
use exif_stripper::exif::{Directory, Entry, ImageFile, MetadataMap, Value};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// Convenience helper for spawning the exif-stripper binary via assert_cmd.
pub fn stripper_cmd() -> Command {
    cargo_bin_cmd!("exif-stripper")
}

/// Write a blank 2x2 image with no metadata.
pub fn blank_image(dir: &Path, name: &str, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    RgbImage::new(2, 2)
        .save_with_format(&path, format)
        .expect("failed to write fixture image");
    path
}

/// Metadata covering every field group plus the preserved fields.
pub fn full_metadata() -> MetadataMap {
    let text = |dir, s| Entry::new(dir, Value::text(s));
    let mut map = MetadataMap::new();

    map.insert(ORIENTATION, Entry::new(Directory::Primary, Value::short(1)));
    map.insert(ARTIST, text(Directory::Primary, "Some Artist"));
    map.insert(COPYRIGHT, text(Directory::Primary, "Copyright (c) Some Artist."));
    map.insert(MAKE, text(Directory::Primary, "SomeCameraMake"));
    map.insert(MODEL, text(Directory::Primary, "SomeCameraModel"));
    map.insert(LENS_MODEL, text(Directory::Exif, "SomeLensModel"));
    map.insert(BODY_SERIAL_NUMBER, text(Directory::Exif, "ABC123"));

    let gps = map.directory_mut(GPS_INFO, Directory::Primary);
    gps.insert(GPS_LATITUDE_REF, text(Directory::Gps, "N"));
    gps.insert(
        GPS_LATITUDE,
        Entry::new(Directory::Gps, Value::Rational(vec![(48, 1), (51, 1), (2964, 100)])),
    );
    map
}

/// Write a JPEG carrying [`full_metadata`].
pub fn image_with_exif(dir: &Path, name: &str) -> PathBuf {
    let path = blank_image(dir, name, ImageFormat::Jpeg);
    let mut image = ImageFile::open(&path)
        .expect("failed to open fixture")
        .expect("fixture is not an image");
    *image.metadata_mut() = full_metadata();
    image.save().expect("failed to write fixture metadata");
    path
}

/// Read back the metadata of an image written by the fixtures.
#[allow(dead_code)]
pub fn read_metadata(path: &Path) -> MetadataMap {
    ImageFile::open(path)
        .expect("failed to open image")
        .expect("not an image")
        .metadata()
        .clone()
}
