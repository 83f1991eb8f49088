//! Document-kind dispatch and the decode → render → assemble → write walk.

use crate::error::PipelineError;
use inkpress_notebook::NotebookDecoder;
use inkpress_render_core::{DocumentWriter, VectorDocument, assemble_document};
use inkpress_traits::{CancelToken, Executor};
use log::info;
use std::io::Write;

/// Kinds of documents the upstream fetch component can hand over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Stroke-based notebook; goes through the full decode/render pipeline.
    Notebook,
    /// Already-rendered PDF; bytes pass through unmodified.
    PdfPassthrough,
}

impl DocumentKind {
    /// Parse the upstream kind tag. Unrecognized tags fail immediately,
    /// before any decode is attempted.
    pub fn from_tag(tag: &str) -> Result<Self, PipelineError> {
        match tag {
            "notebook" => Ok(DocumentKind::Notebook),
            "pdf-passthrough" => Ok(DocumentKind::PdfPassthrough),
            other => Err(PipelineError::UnsupportedKind(other.to_string())),
        }
    }
}

/// One conversion pipeline: an execution strategy plus a cancellation token.
///
/// A pipeline owns no per-document state, so independent conversions can
/// share one or run on separate instances concurrently; each conversion
/// owns its own cursor, notebook, and render buffers for its lifetime.
pub struct Pipeline<E: Executor> {
    executor: E,
    cancel: CancelToken,
}

impl<E: Executor> Pipeline<E> {
    pub fn new(executor: E) -> Self {
        Self::with_cancel(executor, CancelToken::new())
    }

    pub fn with_cancel(executor: E, cancel: CancelToken) -> Self {
        Self { executor, cancel }
    }

    /// Handle for cancelling conversions running on this pipeline.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Decode and render notebook bytes into page-indexed vector geometry.
    pub fn render(&self, bytes: &[u8]) -> Result<VectorDocument, PipelineError> {
        let notebook = NotebookDecoder::with_cancel(bytes, self.cancel.clone()).decode()?;
        info!(
            "decoded notebook: {} page(s) from {} byte(s)",
            notebook.page_count(),
            bytes.len()
        );
        let document = assemble_document(notebook, &self.executor, &self.cancel)?;
        Ok(document)
    }

    /// Run one full conversion: dispatch on `kind_tag`, then either pass the
    /// bytes through or decode, render, and serialize them via `backend`.
    ///
    /// Returns the writer on success. On any failure nothing useful has
    /// been produced — the caller never receives a document missing
    /// trailing pages or strokes.
    pub fn convert<W, D>(
        &self,
        kind_tag: &str,
        bytes: &[u8],
        backend: D,
        mut writer: W,
    ) -> Result<W, PipelineError>
    where
        W: Write + Send,
        D: DocumentWriter<W>,
    {
        match DocumentKind::from_tag(kind_tag)? {
            DocumentKind::PdfPassthrough => {
                writer.write_all(bytes)?;
                Ok(writer)
            }
            DocumentKind::Notebook => {
                let document = self.render(bytes)?;
                let writer = backend.write_document(&document, writer)?;
                Ok(writer)
            }
        }
    }
}
