//! Hand-built EXIF blocks for tests that need layouts the writer never produces.

use img_parts::riff::{RiffChunk, RiffContent};
use img_parts::webp::CHUNK_EXIF;
use img_parts::{Bytes, DynImage, ImageEXIF};
use std::path::Path;

use super::Tag;

pub(crate) const TYPE_ASCII: u16 = 2;
pub(crate) const TYPE_SHORT: u16 = 3;
pub(crate) const TYPE_LONG: u16 = 4;
/// TIFF "IFD" type, which has no decoder.
pub(crate) const TYPE_IFD: u16 = 13;

/// A little-endian TIFF block with one IFD of inline values.
pub(crate) fn raw_tiff(entries: &[(Tag, u16, u32, [u8; 4])]) -> Vec<u8> {
    let mut buf = b"II*\0".to_vec();
    buf.extend_from_slice(&8u32.to_le_bytes());
    buf.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for (tag, type_code, count, value) in entries {
        buf.extend_from_slice(&tag.to_le_bytes());
        buf.extend_from_slice(&type_code.to_le_bytes());
        buf.extend_from_slice(&count.to_le_bytes());
        buf.extend_from_slice(value);
    }
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

/// Replace the EXIF block of a JPEG or PNG file through img-parts.
pub(crate) fn inject_exif(path: &Path, tiff: Vec<u8>) {
    let bytes = Bytes::from(std::fs::read(path).unwrap());
    let mut image = DynImage::from_bytes(bytes).unwrap().unwrap();
    image.set_exif(Some(Bytes::from(tiff)));
    std::fs::write(path, image.encoder().bytes()).unwrap();
}

/// Append a bare-TIFF `EXIF` chunk to a WebP file, the way libwebp stores it.
pub(crate) fn inject_webp_exif(path: &Path, tiff: Vec<u8>) {
    let bytes = Bytes::from(std::fs::read(path).unwrap());
    let Some(DynImage::WebP(mut webp)) = DynImage::from_bytes(bytes).unwrap() else {
        panic!("{} is not a WebP file", path.display());
    };
    webp.remove_chunks_by_id(CHUNK_EXIF);
    webp.chunks_mut()
        .push(RiffChunk::new(CHUNK_EXIF, RiffContent::Data(Bytes::from(tiff))));
    std::fs::write(path, webp.encoder().bytes()).unwrap();
}

/// The raw payload of a WebP file's `EXIF` chunk, if any.
pub(crate) fn webp_exif_chunk(path: &Path) -> Option<Vec<u8>> {
    let bytes = Bytes::from(std::fs::read(path).unwrap());
    match DynImage::from_bytes(bytes).unwrap() {
        Some(DynImage::WebP(webp)) => webp
            .chunk_by_id(CHUNK_EXIF)
            .and_then(|chunk| chunk.content().data())
            .map(|data| data.to_vec()),
        _ => panic!("{} is not a WebP file", path.display()),
    }
}
