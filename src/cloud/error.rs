//! Error types for the tag cloud pipeline.

use std::io;

use thiserror::Error;

/// Result type alias using [`CloudError`].
pub type Result<T> = std::result::Result<T, CloudError>;

/// Everything that can terminate a single run.
///
/// All variants are terminal: the pipeline never retries internally and never
/// hands out a partially computed selection.
#[derive(Error, Debug)]
pub enum CloudError {
    /// The document source could not be opened or a read failed mid-stream.
    /// Raised before any counting result is exposed.
    #[error("failed to read document: {0}")]
    Read(#[source] io::Error),

    /// The requested term count was not a parsable non-negative integer.
    /// Raised before any processing begins.
    #[error("invalid term count: {0}")]
    InvalidRequest(String),

    /// The renderer sink rejected the output. Carries the document label and
    /// the requested count so the caller can retry the render.
    #[error("failed to write tag cloud for {label:?} (top {requested}): {source}")]
    Write {
        label: String,
        requested: usize,
        #[source]
        source: io::Error,
    },
}
