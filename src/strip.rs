//! Field-group-aware removal of EXIF entries.

use crate::exif::{Entry, MetadataMap, Tag};
use crate::fields::{FieldGroup, OWNERSHIP_FIELDS, PRESERVE_FIELDS};

/// Remove the requested field groups from `exif`, returning whether it changed.
///
/// With [`FieldGroup::All`] the map is cleared and only the preserved fields
/// (color profile, orientation) are put back, plus the ownership fields
/// (artist, copyright) unless [`FieldGroup::Copyright`] is also requested.
/// Otherwise each requested group's tags are deleted; tags that are not
/// present are skipped.
///
/// Applying the same request twice never reports a change the second time.
pub fn strip_metadata(exif: &mut MetadataMap, fields: &[FieldGroup]) -> bool {
    let original = exif.clone();

    if fields.contains(&FieldGroup::All) {
        let ownership: &[Tag] = if fields.contains(&FieldGroup::Copyright) {
            &[]
        } else {
            OWNERSHIP_FIELDS
        };

        let preserved: Vec<(Tag, Entry)> = PRESERVE_FIELDS
            .iter()
            .chain(ownership)
            .filter_map(|&tag| exif.get(tag).map(|entry| (tag, entry.clone())))
            .collect();

        exif.clear();
        for (tag, entry) in preserved {
            exif.insert(tag, entry);
        }
    } else {
        for tag in fields.iter().filter_map(|group| group.tags()).flatten() {
            exif.remove(*tag);
        }
    }

    *exif != original
}
