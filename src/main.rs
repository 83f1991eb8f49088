use inkpress::{ExecutorImpl, LopdfWriter, Pipeline, PipelineError};
use std::env;
use std::fs;

/// A simple CLI to convert a notebook file into a paginated vector PDF.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Convert a stroke-based tablet notebook file to a PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/input.note> <path/to/output.pdf> [kind]",
            args[0]
        );
        eprintln!();
        eprintln!("  kind: 'notebook' (default) or 'pdf-passthrough'");
        std::process::exit(1);
    }
    let kind = args.get(3).map(String::as_str).unwrap_or("notebook");

    let bytes = fs::read(&args[1])?;
    log::info!("read {} byte(s) from {}", bytes.len(), args[1]);

    let pipeline = Pipeline::new(ExecutorImpl::default());
    let output = pipeline.convert(kind, &bytes, LopdfWriter::new(), Vec::new())?;

    fs::write(&args[2], &output)?;
    println!("Wrote {} bytes to {}", output.len(), args[2]);
    Ok(())
}
