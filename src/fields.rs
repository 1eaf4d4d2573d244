//! Field groups: named, curated subsets of EXIF tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StripError};
use crate::exif::Tag;
use crate::exif::tags::*;

/// Groups of fields to target.
///
/// [`FieldGroup::All`] is synthetic: it means "everything except the
/// preserved fields, and except the ownership fields unless
/// [`FieldGroup::Copyright`] is also requested".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FieldGroup {
    All,
    Camera,
    /// Only reachable through `--remove-copyright` on the command line.
    #[cfg_attr(feature = "cli", value(skip))]
    Copyright,
    Gps,
    Lens,
    Serials,
}

impl FieldGroup {
    /// Every group, in display order.
    pub const VARIANTS: [FieldGroup; 6] = [
        Self::All,
        Self::Camera,
        Self::Copyright,
        Self::Gps,
        Self::Lens,
        Self::Serials,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Camera => "camera",
            Self::Copyright => "copyright",
            Self::Gps => "gps",
            Self::Lens => "lens",
            Self::Serials => "serials",
        }
    }

    /// The tags covered by this group, or `None` for [`FieldGroup::All`].
    pub fn tags(self) -> Option<&'static [Tag]> {
        FIELD_TABLE
            .iter()
            .find(|(group, _)| *group == self)
            .map(|(_, tags)| *tags)
    }

    fn options() -> String {
        Self::VARIANTS
            .iter()
            .map(|group| group.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldGroup {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::VARIANTS
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| StripError::UnknownField {
                field: s.to_string(),
                options: Self::options(),
            })
    }
}

/// Validate a list of field names, failing on the first unknown one.
pub fn parse_fields<I, S>(names: I) -> Result<Vec<FieldGroup>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|name| name.as_ref().parse()).collect()
}

/// Tags removed by each concrete group.
pub const FIELD_TABLE: &[(FieldGroup, &[Tag])] = &[
    (
        FieldGroup::Camera,
        &[MAKE, MODEL, MAKER_NOTE, MAKER_NOTE_SAFETY],
    ),
    (FieldGroup::Copyright, OWNERSHIP_FIELDS),
    (FieldGroup::Gps, &[GPS_INFO]),
    (FieldGroup::Lens, &[LENS_MAKE, LENS_MODEL]),
    (
        FieldGroup::Serials,
        &[BODY_SERIAL_NUMBER, CAMERA_SERIAL_NUMBER, LENS_SERIAL_NUMBER],
    ),
];

/// Always kept when stripping with [`FieldGroup::All`].
pub const PRESERVE_FIELDS: &[Tag] = &[INTER_COLOR_PROFILE, ORIENTATION];

/// Kept with [`FieldGroup::All`] unless [`FieldGroup::Copyright`] is requested.
pub const OWNERSHIP_FIELDS: &[Tag] = &[ARTIST, COPYRIGHT];
