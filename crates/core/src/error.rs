use inkpress_notebook::DecodeError;
use inkpress_render_core::RenderError;
use thiserror::Error;

/// The main error enum for whole-conversion operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The notebook byte stream was structurally truncated or otherwise
    /// undecodable. Not retried: corrupt input will not become valid.
    #[error("decode error: {0}")]
    Decode(DecodeError),
    /// Top-level dispatch received a kind other than notebook or
    /// pdf-passthrough. No decode is attempted.
    #[error("unsupported document kind: '{0}'")]
    UnsupportedKind(String),
    /// The downstream writer could not serialize the assembled geometry.
    /// Propagated unchanged; retry policy belongs to the caller.
    #[error("rendering error: {0}")]
    Render(RenderError),
    /// The caller's cancellation token was signalled; nothing was written.
    #[error("conversion cancelled")]
    Cancelled,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DecodeError> for PipelineError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Cancelled => PipelineError::Cancelled,
            other => PipelineError::Decode(other),
        }
    }
}

impl From<RenderError> for PipelineError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Cancelled => PipelineError::Cancelled,
            other => PipelineError::Render(other),
        }
    }
}
