use exif::{Context, In, Reader};
use image::ImageFormat;
use img_parts::webp::CHUNK_EXIF;
use img_parts::{Bytes, DynImage, ImageEXIF};
use std::path::{Path, PathBuf};

use super::map::{Directory, Entry, MetadataMap, Value};
use super::tags::*;
use crate::error::Result;

// JPEG APP1 identifier. WebP EXIF chunks usually hold bare TIFF, but some
// writers copy the identifier in as well.
const EXIF_PREFIX: &[u8] = b"Exif\0\0";

/// IFD0 tags describing where image data lives inside the TIFF block. They
/// are never user metadata and are rebuilt when the block is encoded.
const LAYOUT_TAGS: &[Tag] = &[
    STRIP_OFFSETS,
    STRIP_BYTE_COUNTS,
    TILE_OFFSETS,
    TILE_BYTE_COUNTS,
    JPEG_INTERCHANGE_FORMAT,
    JPEG_INTERCHANGE_FORMAT_LENGTH,
];

/// An open image whose EXIF block has been decoded into a [`MetadataMap`].
///
/// The handle owns the parsed container; every segment other than EXIF is
/// written back untouched by [`ImageFile::save`]. Dropping the handle without
/// saving leaves the file as it was.
pub struct ImageFile {
    pub(super) path: PathBuf,
    pub(super) image: DynImage,
    pub(super) little_endian: bool,
    pub(super) metadata: MetadataMap,
}

impl ImageFile {
    /// Open an image and decode its EXIF metadata.
    ///
    /// Returns `Ok(None)` when the file is not an image, or is an image in a
    /// container that cannot carry EXIF (only JPEG, PNG and WebP can).
    /// I/O and EXIF decoding failures are returned as errors.
    pub fn open(path: &Path) -> Result<Option<Self>> {
        let bytes = std::fs::read(path)?;

        let format = match image::guess_format(&bytes) {
            Ok(format) => format,
            Err(_) => {
                log::debug!("Not an image: {}", path.display());
                return Ok(None);
            }
        };
        if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP) {
            log::debug!("EXIF rewrite not supported for {format:?}: {}", path.display());
            return Ok(None);
        }

        let Some(image) = DynImage::from_bytes(Bytes::from(bytes))? else {
            log::debug!("Unrecognized container: {}", path.display());
            return Ok(None);
        };

        let (metadata, little_endian) = match raw_exif(&image) {
            Some(raw) if !raw.is_empty() => decode_tiff(&raw)?,
            _ => (MetadataMap::new(), true),
        };
        log::debug!("{}: {} EXIF entries", path.display(), metadata.len());

        Ok(Some(Self {
            path: path.to_path_buf(),
            image,
            little_endian,
            metadata,
        }))
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut MetadataMap {
        &mut self.metadata
    }
}

/// The raw EXIF block of a container, with or without the `Exif\0\0` prefix.
///
/// img-parts only reports a WebP `EXIF` chunk that carries the prefix, so the
/// chunk is read directly to also pick up the bare TIFF that libwebp writes.
fn raw_exif(image: &DynImage) -> Option<Bytes> {
    match image {
        DynImage::WebP(webp) => webp.chunk_by_id(CHUNK_EXIF)?.content().data().cloned(),
        other => other.exif(),
    }
}

/// Decode a raw EXIF (TIFF) block into a metadata map.
///
/// Returns the map together with the block's byte order, so a rewrite keeps
/// the original endianness. Only the primary image is represented; the
/// thumbnail directory is dropped.
pub fn decode_tiff(raw: &[u8]) -> Result<(MetadataMap, bool)> {
    let raw = raw.strip_prefix(EXIF_PREFIX).unwrap_or(raw);
    let exif = Reader::new().read_raw(raw.to_vec())?;

    let mut map = MetadataMap::new();
    for field in exif.fields() {
        if field.ifd_num != In::PRIMARY {
            continue;
        }
        let number = field.tag.number();
        let value = from_exif_value(&field.value);

        match field.tag.context() {
            Context::Tiff => {
                // Sub-IFD pointers are rebuilt by the writer
                if number == EXIF_IFD_POINTER || number == GPS_INFO || LAYOUT_TAGS.contains(&number) {
                    continue;
                }
                map.insert(number, Entry::new(Directory::Primary, value));
            }
            Context::Exif => {
                if number == INTEROP_IFD_POINTER {
                    continue;
                }
                map.insert(number, Entry::new(Directory::Exif, value));
            }
            Context::Gps => {
                map.directory_mut(GPS_INFO, Directory::Primary)
                    .insert(number, Entry::new(Directory::Gps, value));
            }
            _ => {
                map.directory_mut(INTEROP_IFD_POINTER, Directory::Exif)
                    .insert(number, Entry::new(Directory::Interop, value));
            }
        }
    }

    Ok((map, exif.little_endian()))
}

fn from_exif_value(value: &exif::Value) -> Value {
    use exif::Value as V;

    match value {
        V::Byte(v) => Value::Byte(v.clone()),
        V::Ascii(v) => Value::Ascii(v.clone()),
        V::Short(v) => Value::Short(v.clone()),
        V::Long(v) => Value::Long(v.clone()),
        V::Rational(v) => Value::Rational(v.iter().map(|r| (r.num, r.denom)).collect()),
        V::SByte(v) => Value::SByte(v.clone()),
        V::Undefined(v, _) => Value::Undefined(v.clone()),
        V::SShort(v) => Value::SShort(v.clone()),
        V::SLong(v) => Value::SLong(v.clone()),
        V::SRational(v) => Value::SRational(v.iter().map(|r| (r.num, r.denom)).collect()),
        V::Float(v) => Value::Float(v.clone()),
        V::Double(v) => Value::Double(v.clone()),
        V::Unknown(type_code, count, _) => {
            log::debug!("Field of unsupported TIFF type {type_code} cannot be re-encoded");
            Value::Unknown {
                type_code: *type_code,
                count: *count,
            }
        }
    }
}
