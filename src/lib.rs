//! # inkpress
//!
//! Converts a stroke-based tablet notebook — a length-prefixed binary
//! stream of pages, layers, strokes, and points — into a paginated vector
//! PDF document.
//!
//! ```no_run
//! use inkpress::{ExecutorImpl, LopdfWriter, Pipeline};
//!
//! let bytes = std::fs::read("notes.note")?;
//! let pipeline = Pipeline::new(ExecutorImpl::default());
//! let pdf = pipeline.convert("notebook", &bytes, LopdfWriter::new(), Vec::new())?;
//! std::fs::write("notes.pdf", &pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export foundation crates
pub use inkpress_traits as traits;
pub use inkpress_types as types;

// Re-export pipeline stages
pub use inkpress_core as core;
pub use inkpress_notebook as notebook;
pub use inkpress_render_core as render;

// Re-export commonly used types
pub use inkpress_core::{DocumentKind, Pipeline, PipelineError};
pub use inkpress_executor::ExecutorImpl;
pub use inkpress_notebook::{DecodeError, Notebook, decode_notebook};
pub use inkpress_render_core::{RenderError, VectorDocument};
pub use inkpress_render_lopdf::LopdfWriter;
pub use inkpress_traits::{CancelToken, Executor, SyncExecutor};

/// Convert notebook bytes straight to PDF bytes with the default executor.
pub fn notebook_to_pdf(bytes: &[u8]) -> Result<Vec<u8>, PipelineError> {
    let pipeline = Pipeline::new(ExecutorImpl::default());
    pipeline.convert("notebook", bytes, LopdfWriter::new(), Vec::new())
}
