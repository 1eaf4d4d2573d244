//! Numeric EXIF tag codes referenced by the field tables.
//!
//! Meanings follow <https://exiv2.org/tags.html>.

/// Numeric identifier of one metadata field.
pub type Tag = u16;

// IFD0
pub const ORIENTATION: Tag = 0x0112;
pub const MAKE: Tag = 0x010F;
pub const MODEL: Tag = 0x0110;
pub const ARTIST: Tag = 0x013B;
pub const COPYRIGHT: Tag = 0x8298;
pub const INTER_COLOR_PROFILE: Tag = 0x8773;
pub const CAMERA_SERIAL_NUMBER: Tag = 0xC62F;
pub const MAKER_NOTE_SAFETY: Tag = 0xC635;

// Image data layout, rebuilt on write
pub const STRIP_OFFSETS: Tag = 0x0111;
pub const STRIP_BYTE_COUNTS: Tag = 0x0117;
pub const TILE_OFFSETS: Tag = 0x0144;
pub const TILE_BYTE_COUNTS: Tag = 0x0145;
pub const JPEG_INTERCHANGE_FORMAT: Tag = 0x0201;
pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Tag = 0x0202;

// Sub-IFD pointers
pub const EXIF_IFD_POINTER: Tag = 0x8769;
pub const GPS_INFO: Tag = 0x8825;
pub const INTEROP_IFD_POINTER: Tag = 0xA005;

// Exif IFD
pub const MAKER_NOTE: Tag = 0x927C;
pub const CAMERA_OWNER_NAME: Tag = 0xA430;
pub const BODY_SERIAL_NUMBER: Tag = 0xA431;
pub const LENS_MAKE: Tag = 0xA433;
pub const LENS_MODEL: Tag = 0xA434;
pub const LENS_SERIAL_NUMBER: Tag = 0xA435;

// GPS IFD
pub const GPS_VERSION_ID: Tag = 0x0000;
pub const GPS_LATITUDE_REF: Tag = 0x0001;
pub const GPS_LATITUDE: Tag = 0x0002;
pub const GPS_TRACK_REF: Tag = 0x000E;
