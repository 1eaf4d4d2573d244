//! # exif-stripper
//!
//! Strip EXIF metadata from images by field group, keeping the fields that are
//! safe to share (color profile, orientation) and, unless asked otherwise, the
//! ownership fields (artist, copyright). Built to run as a pre-commit hook so
//! GPS coordinates, serial numbers and camera details don't end up in a repository.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exif_stripper::fields::FieldGroup;
//! use exif_stripper::pipeline::{process_image, ProcessOptions};
//! use std::path::Path;
//!
//! fn main() -> exif_stripper::Result<()> {
//!     let options = ProcessOptions {
//!         fields: vec![FieldGroup::Gps, FieldGroup::Serials],
//!         ..Default::default()
//!     };
//!     let result = process_image(Path::new("photo.jpg"), &options)?;
//!     if result.changed {
//!         println!("Removed tags: {:?}", result.removed_tags);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The stripping decision works on an in-memory [`MetadataMap`](exif::MetadataMap)
//! and never touches the filesystem:
//!
//! ```rust,no_run
//! use exif_stripper::exif::ImageFile;
//! use exif_stripper::fields::FieldGroup;
//! use exif_stripper::strip::strip_metadata;
//! use std::path::Path;
//!
//! fn main() -> exif_stripper::Result<()> {
//!     if let Some(mut image) = ImageFile::open(Path::new("photo.png"))? {
//!         if strip_metadata(image.metadata_mut(), &[FieldGroup::All]) {
//!             image.save()?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Formats
//!
//! | Format | EXIF location |
//! |--------|---------------|
//! | JPEG (`.jpg`, `.jpeg`) | APP1 segment |
//! | PNG (`.png`) | `eXIf` chunk |
//! | WebP (`.webp`) | `EXIF` chunk |
//!
//! Anything else is left alone.
//!
//! ## Modules
//!
//! - [`exif`] — Metadata map, and reading/writing it through image files
//! - [`fields`] — Field groups and the tag tables behind them
//! - [`strip`] — The stripping algorithm and change detection
//! - [`pipeline`] — Per-file driver and input collection
//! - [`config`] — Optional JSON configuration

pub mod config;
pub mod error;
pub mod exif;
pub mod fields;
pub mod pipeline;
pub mod strip;

pub use error::{Result, StripError};
