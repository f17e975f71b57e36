use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
