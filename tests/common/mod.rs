pub mod fixtures;
pub mod pdf_assertions;

use inkpress::{ExecutorImpl, LopdfWriter, Pipeline, PipelineError, SyncExecutor, VectorDocument};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Run the full pipeline on notebook bytes and return the produced PDF bytes.
pub fn convert_to_pdf(bytes: &[u8]) -> Result<Vec<u8>, PipelineError> {
    let pipeline = Pipeline::new(ExecutorImpl::default());
    pipeline.convert("notebook", bytes, LopdfWriter::new(), Vec::new())
}

/// Decode and render notebook bytes into vector geometry (no PDF step),
/// using the sequential executor.
pub fn render_document(bytes: &[u8]) -> Result<VectorDocument, PipelineError> {
    Pipeline::new(SyncExecutor::new()).render(bytes)
}
