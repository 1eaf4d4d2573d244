//! EXIF metadata as a mutable key-value map, and its round trip through image files.
//!
//! - [`ImageFile::open`] — read an image and decode its EXIF block into a [`MetadataMap`]
//! - [`ImageFile::save`] — re-encode the map and write the image back
//!
//! Containers are handled by `img-parts` (JPEG APP1, PNG `eXIf`, WebP `EXIF`),
//! so only the EXIF segment changes on save. The TIFF structure inside is read
//! and written with `kamadak-exif`.

mod map;
mod reader;
pub mod tags;
#[cfg(test)]
pub(crate) mod testing;
mod writer;

pub use map::{Directory, Entry, MetadataMap, Value};
pub use reader::{ImageFile, decode_tiff};
pub use tags::Tag;
pub use writer::encode_tiff;
