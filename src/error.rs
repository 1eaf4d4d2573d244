use thiserror::Error;

/// Errors surfaced by the stripping library.
///
/// Per-file problems such as a missing path or a file that is not an image
/// never show up here; the pipeline treats those as "nothing changed".
#[derive(Error, Debug)]
pub enum StripError {
    #[error("Unknown field \"{field}\" -- options are {options}")]
    UnknownField { field: String, options: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    #[error("Image container error: {0}")]
    Container(#[from] img_parts::Error),
}

pub type Result<T> = std::result::Result<T, StripError>;
