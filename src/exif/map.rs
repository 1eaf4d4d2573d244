use std::collections::BTreeMap;
use std::fmt;

use super::tags::Tag;

/// The image file directory an entry is stored in.
///
/// IFD0 and the Exif sub-IFD are flattened into the top level of a
/// [`MetadataMap`]; the directory is kept so entries are written back where
/// they were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directory {
    /// IFD0, the primary image directory.
    Primary,
    /// The Exif sub-IFD (capture settings, lens, serials).
    Exif,
    /// The GPS sub-IFD, nested under [`GPS_INFO`](super::tags::GPS_INFO).
    Gps,
    /// The interoperability sub-IFD, nested under the Exif IFD.
    Interop,
}

impl Directory {
    pub(crate) fn context(self) -> exif::Context {
        match self {
            Self::Primary => exif::Context::Tiff,
            Self::Exif => exif::Context::Exif,
            Self::Gps => exif::Context::Gps,
            Self::Interop => exif::Context::Interop,
        }
    }

    /// Human-readable name of `tag` within this directory, e.g. `Make`.
    pub fn tag_name(self, tag: Tag) -> String {
        exif::Tag(self.context(), tag).to_string()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "IFD0",
            Self::Exif => "Exif",
            Self::Gps => "GPS",
            Self::Interop => "Interop",
        };
        f.write_str(name)
    }
}

/// A decoded EXIF value, one variant per TIFF field type.
///
/// Sub-directories (GPS, Interop) are represented as a nested map so two maps
/// compare structurally all the way down.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(Vec<u8>),
    /// NUL-separated ASCII strings, without their terminators.
    Ascii(Vec<Vec<u8>>),
    Short(Vec<u16>),
    Long(Vec<u32>),
    /// Numerator / denominator pairs.
    Rational(Vec<(u32, u32)>),
    SByte(Vec<i8>),
    Undefined(Vec<u8>),
    SShort(Vec<i16>),
    SLong(Vec<i32>),
    SRational(Vec<(i32, i32)>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    /// A field whose TIFF type has no decoder. It can be removed but is not
    /// written back.
    Unknown { type_code: u16, count: u32 },
    Directory(MetadataMap),
}

impl Value {
    /// A single ASCII string.
    pub fn text(s: &str) -> Self {
        Self::Ascii(vec![s.as_bytes().to_vec()])
    }

    /// A single SHORT.
    pub fn short(n: u16) -> Self {
        Self::Short(vec![n])
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii(parts) => {
                let parts: Vec<String> = parts
                    .iter()
                    .map(|p| String::from_utf8_lossy(p).into_owned())
                    .collect();
                join(f, &parts)
            }
            Self::Byte(bytes) | Self::Undefined(bytes) => {
                if bytes.len() > 16 {
                    write!(f, "<{} bytes>", bytes.len())
                } else {
                    for b in bytes {
                        write!(f, "{b:02x}")?;
                    }
                    Ok(())
                }
            }
            Self::Short(v) => join(f, v),
            Self::Long(v) => join(f, v),
            Self::SByte(v) => join(f, v),
            Self::SShort(v) => join(f, v),
            Self::SLong(v) => join(f, v),
            Self::Float(v) => join(f, v),
            Self::Double(v) => join(f, v),
            Self::Rational(v) => {
                let v: Vec<String> = v.iter().map(|(n, d)| format!("{n}/{d}")).collect();
                join(f, &v)
            }
            Self::SRational(v) => {
                let v: Vec<String> = v.iter().map(|(n, d)| format!("{n}/{d}")).collect();
                join(f, &v)
            }
            Self::Unknown { type_code, count } => write!(f, "<{count} values of type {type_code}>"),
            Self::Directory(map) => write!(f, "{{{} entries}}", map.len()),
        }
    }
}

/// One metadata entry: where it lives and what it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub directory: Directory,
    pub value: Value,
}

impl Entry {
    pub fn new(directory: Directory, value: Value) -> Self {
        Self { directory, value }
    }
}

/// EXIF metadata of one image as a mapping from tag to entry.
///
/// Keys are unique and iterate in ascending tag order, which is also the order
/// TIFF requires on disk. Equality is structural, nested GPS maps included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataMap {
    entries: BTreeMap<Tag, Entry>,
}

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, tag: Tag) -> Option<&Entry> {
        self.entries.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Insert or replace an entry, returning the previous one.
    pub fn insert(&mut self, tag: Tag, entry: Entry) -> Option<Entry> {
        self.entries.insert(tag, entry)
    }

    /// Remove an entry. Removing an absent tag is a no-op.
    pub fn remove(&mut self, tag: Tag) -> Option<Entry> {
        self.entries.remove(&tag)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tag, &Entry)> {
        self.entries.iter().map(|(tag, entry)| (*tag, entry))
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Get the nested map stored under `tag`, creating it if needed.
    pub fn directory_mut(&mut self, tag: Tag, directory: Directory) -> &mut MetadataMap {
        let entry = self
            .entries
            .entry(tag)
            .or_insert_with(|| Entry::new(directory, Value::Directory(MetadataMap::new())));
        if !matches!(entry.value, Value::Directory(_)) {
            entry.value = Value::Directory(MetadataMap::new());
        }
        match &mut entry.value {
            Value::Directory(map) => map,
            _ => unreachable!("entry was just set to a directory"),
        }
    }
}
