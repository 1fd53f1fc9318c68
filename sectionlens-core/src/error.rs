use thiserror::Error;

/// Errors the detection core can raise. Empty input is not an error; the
/// only failure mode is a malformed record from the upstream collaborator,
/// which we surface immediately rather than patching over with defaults.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("element record {index} has invalid geometry: {detail}")]
    InvalidGeometry { index: usize, detail: String },
}
