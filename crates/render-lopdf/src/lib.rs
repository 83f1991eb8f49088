//! PDF serialization backend using the `lopdf` library.

mod writer;

pub use writer::LopdfWriter;
