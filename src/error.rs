use thiserror::Error;

use crate::convert::ConvertError;

/// Everything that can go wrong between raw bytes and typed records. IO,
/// JSON parse, and schema validation stay distinct so callers can tell a
/// missing file from a malformed document from an off-schema one.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// The validated tree did not fit the typed records. Indicates drift
    /// between the type map and the record definitions, not bad input.
    #[error("model mismatch {0}")]
    Model(String),
    #[error("invalid version: {0}")]
    Version(String),
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
}
