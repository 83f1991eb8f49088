use crate::error::RenderError;
use crate::types::VectorDocument;
use std::io::Write;

/// Boundary to the downstream document writer.
///
/// The writer owns the output byte format; the pipeline only guarantees it
/// receives a complete, page-ordered [`VectorDocument`]. Writer failures
/// propagate unchanged — retry policy, if any, belongs to the caller.
pub trait DocumentWriter<W: Write + Send> {
    /// Serialize the document into `writer`, returning the writer on success.
    fn write_document(self, document: &VectorDocument, writer: W) -> Result<W, RenderError>;
}
