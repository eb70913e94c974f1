use std::path::PathBuf;

/// Errors reported by the index, loader, splicer and generator.
///
/// A lookup miss is not an error; `OrderedImageIndex::find` returns `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image cannot produce a color key (too small, or no color channels).
    #[error("invalid image {}: {reason}", path.display())]
    InvalidImage { path: PathBuf, reason: String },

    /// A query was issued against an index that holds no images.
    #[error("image index is empty, load images first")]
    EmptyIndex,

    /// No other image lives next to the splice target.
    #[error("no other image found in {}", dir.display())]
    NoSiblingImage { dir: PathBuf },

    /// More images were requested than there are distinct named colors.
    #[error("requested {requested} images but only {available} colors are available")]
    InsufficientColors { requested: usize, available: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("generation worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
