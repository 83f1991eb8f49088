//! # inkpress-render-core
//!
//! Turns a decoded notebook into page-indexed vector geometry.
//!
//! Pages are rendered independently (no cross-page state), so the
//! [`assembler`] can fan page jobs out over any [`Executor`] and still
//! guarantee that output page *i* corresponds to input page *i*. The
//! assembled [`VectorDocument`] is handed to a [`DocumentWriter`] backend
//! for serialization; this crate does not own any output byte format.
//!
//! [`Executor`]: inkpress_traits::Executor

pub mod assembler;
pub mod error;
pub mod page;
pub mod traits;
pub mod types;
pub mod utils;

pub use assembler::assemble_document;
pub use error::RenderError;
pub use page::{MIN_STROKE_WIDTH, PAGE_SIZE, render_page};
pub use traits::DocumentWriter;
pub use types::{LineCap, LineJoin, VectorDocument, VectorPage, VectorPath};
