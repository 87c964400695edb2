use std::path::PathBuf;

use crate::skew::SkewError;

/// Errors surfaced by a scan run.
///
/// All failures are single-attempt: a fatal error aborts the current
/// document without retries or partial output. An individual checkbox with
/// an invalid interior crop is not an error — it is dropped during
/// classification.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("input image not found: {0}")]
    ResourceNotFound(PathBuf),

    #[error("failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    SkewEstimation(#[from] SkewError),

    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("missing required configuration: {0}")]
    Config(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
