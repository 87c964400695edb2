//! Boundary to the external skew estimator.

use std::path::Path;

/// Failure modes of a skew estimator.
#[derive(thiserror::Error, Debug)]
pub enum SkewError {
    #[error("could not read source for skew estimation: {0}")]
    Read(#[from] std::io::Error),

    #[error("skew estimation failed: {0}")]
    Estimation(String),
}

/// Supplies the in-plane rotation angle of a scanned document, in degrees
/// with counter-clockwise positive.
///
/// The production implementation is a Radon-transform deskewer that lives
/// outside this crate; the pipeline depends only on this boundary. A
/// failure here is fatal for the document — the run never falls back to
/// uncorrected processing.
pub trait SkewEstimator {
    fn estimate(&self, path: &Path) -> Result<f64, SkewError>;
}

/// Fixed angle, for configs where the skew is known or corrected upstream.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSkew(pub f64);

impl SkewEstimator for FixedSkew {
    fn estimate(&self, _path: &Path) -> Result<f64, SkewError> {
        Ok(self.0)
    }
}
