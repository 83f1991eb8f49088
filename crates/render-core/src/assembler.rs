//! Combines per-page rendered geometry into one ordered document.

use crate::error::RenderError;
use crate::page::render_page;
use crate::types::VectorDocument;
use inkpress_notebook::Notebook;
use inkpress_traits::{CancelToken, Executor};
use log::debug;
use std::sync::Arc;

/// Render every page of `notebook` through `executor` and assemble the
/// results in page order.
///
/// Page jobs carry their index and the executor returns results in input
/// order, so the assembled document's page *i* always corresponds to
/// notebook page *i* no matter which job finishes first. Blank pages stay
/// blank pages, never skipped. Cancellation is checked per page job; a
/// cancelled run yields an error, not a partial document.
pub fn assemble_document<E: Executor>(
    notebook: Notebook,
    executor: &E,
    cancel: &CancelToken,
) -> Result<VectorDocument, RenderError> {
    let page_count = notebook.pages.len();
    debug!(
        "assembling {page_count} page(s) via '{}' executor (parallelism {})",
        executor.name(),
        executor.parallelism()
    );

    let notebook = Arc::new(notebook);
    let indices: Vec<usize> = (0..page_count).collect();
    let job_notebook = Arc::clone(&notebook);
    let job_cancel = cancel.clone();

    let results = executor.execute_all_fallible(indices, move |index| {
        if job_cancel.is_cancelled() {
            return Err(RenderError::Cancelled);
        }
        Ok(render_page(&job_notebook.pages[index]))
    });

    let mut pages = Vec::with_capacity(results.len());
    for result in results {
        pages.push(result?);
    }
    Ok(VectorDocument { pages })
}
