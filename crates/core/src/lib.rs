//! # inkpress-core
//!
//! Platform-agnostic conversion pipeline. Raw notebook bytes plus a
//! document-kind tag come in; a complete serialized document comes out, or
//! exactly one descriptive error. There is no partial-success path: every
//! run ends decoded-rendered-written, decode-failed, render-failed, or
//! cancelled.
//!
//! This crate has no platform dependencies — no filesystem, no threads of
//! its own. Parallelism arrives through the [`Executor`] abstraction and
//! output through the [`DocumentWriter`] seam.
//!
//! [`Executor`]: inkpress_traits::Executor
//! [`DocumentWriter`]: inkpress_render_core::DocumentWriter

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentKind, Pipeline};
