use exif::experimental::Writer;
use exif::{Field, In};
use img_parts::riff::RiffContent;
use img_parts::webp::CHUNK_EXIF;
use img_parts::{Bytes, DynImage, ImageEXIF};
use std::io::Cursor;

use super::map::{MetadataMap, Value};
use super::reader::ImageFile;
use crate::error::Result;

impl ImageFile {
    /// Re-encode the EXIF block from the current metadata and write the file.
    ///
    /// A map with nothing left to encode removes the EXIF block entirely rather
    /// than leaving an empty TIFF structure behind. All other segments are
    /// preserved.
    pub fn save(self) -> Result<()> {
        let mut image = self.image;

        match encode_tiff(&self.metadata, self.little_endian)? {
            Some(tiff) => set_raw_exif(&mut image, Bytes::from(tiff)),
            None => image.set_exif(None),
        }

        let output = image.encoder().bytes();
        std::fs::write(&self.path, &output)?;
        log::debug!("Wrote {} bytes to {}", output.len(), self.path.display());
        Ok(())
    }
}

/// Store a TIFF block in the container.
///
/// img-parts prefixes WebP `EXIF` chunks with the JPEG APP1 identifier; the
/// chunk is rewritten to hold the bare TIFF that libwebp and exiftool expect.
fn set_raw_exif(image: &mut DynImage, tiff: Bytes) {
    image.set_exif(Some(tiff.clone()));

    if let DynImage::WebP(webp) = image {
        if let Some(chunk) = webp.chunks_mut().iter_mut().find(|c| c.id() == CHUNK_EXIF) {
            *chunk.content_mut() = RiffContent::Data(tiff);
        }
    }
}

/// Encode a metadata map as a raw EXIF (TIFF) block.
///
/// Pointer tags for the Exif, GPS and Interop sub-IFDs are synthesized from
/// the entries' directories. Returns `None` when no entry can be encoded.
pub fn encode_tiff(map: &MetadataMap, little_endian: bool) -> Result<Option<Vec<u8>>> {
    let mut fields = Vec::with_capacity(map.len());
    collect_fields(map, &mut fields);
    if fields.is_empty() {
        return Ok(None);
    }

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer.write(&mut buf, little_endian)?;
    Ok(Some(buf.into_inner()))
}

fn collect_fields(map: &MetadataMap, fields: &mut Vec<Field>) {
    for (tag, entry) in map.iter() {
        if let Value::Directory(sub) = &entry.value {
            collect_fields(sub, fields);
            continue;
        }

        match to_exif_value(&entry.value) {
            Some(value) => fields.push(Field {
                tag: exif::Tag(entry.directory.context(), tag),
                ifd_num: In::PRIMARY,
                value,
            }),
            None => log::warn!(
                "Dropping {} [{}]: its TIFF type cannot be written",
                entry.directory.tag_name(tag),
                entry.directory
            ),
        }
    }
}

fn to_exif_value(value: &Value) -> Option<exif::Value> {
    use exif::Value as V;

    let value = match value {
        Value::Byte(v) => V::Byte(v.clone()),
        Value::Ascii(v) => V::Ascii(v.clone()),
        Value::Short(v) => V::Short(v.clone()),
        Value::Long(v) => V::Long(v.clone()),
        Value::Rational(v) => V::Rational(
            v.iter()
                .map(|&(num, denom)| exif::Rational { num, denom })
                .collect(),
        ),
        Value::SByte(v) => V::SByte(v.clone()),
        Value::Undefined(v) => V::Undefined(v.clone(), 0),
        Value::SShort(v) => V::SShort(v.clone()),
        Value::SLong(v) => V::SLong(v.clone()),
        Value::SRational(v) => V::SRational(
            v.iter()
                .map(|&(num, denom)| exif::SRational { num, denom })
                .collect(),
        ),
        Value::Float(v) => V::Float(v.clone()),
        Value::Double(v) => V::Double(v.clone()),
        Value::Unknown { .. } | Value::Directory(_) => return None,
    };
    Some(value)
}
