//! Render error type.

use thiserror::Error;

/// Failure while writing a rendered tree to a sink.
///
/// Rendering itself cannot fail; every error originates in the sink and is
/// passed through unchanged.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("sink formatter failed")]
    Fmt(#[from] std::fmt::Error),
}
