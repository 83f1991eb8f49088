//! # inkpress-notebook
//!
//! Decodes the raw byte stream of a stroke-based tablet notebook into an
//! in-memory [`Notebook`] (pages → layers → strokes → points).
//!
//! The wire format is a fixed little-endian layout of nested length-prefixed
//! records. Decoding is a single linear pass over a bounds-checked
//! [`ByteCursor`]; any read that cannot be satisfied from the remaining
//! buffer aborts the whole decode with [`DecodeError::TruncatedInput`] —
//! there is no partial-document recovery. Unrecognized pen or color codes
//! are not structural damage and resolve to defaults instead of failing.

pub mod cursor;
pub mod decode;
pub mod error;
pub mod model;
pub mod style;

pub use cursor::ByteCursor;
pub use decode::{HEADER_LEN, NotebookDecoder, decode_notebook};
pub use error::DecodeError;
pub use model::{Layer, Notebook, Page, Stroke, StrokePoint};
pub use style::{PenKind, StrokeColor};
