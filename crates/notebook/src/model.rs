use crate::style::{PenKind, StrokeColor};

/// Decoded in-memory representation of one hand-written document.
///
/// Ownership is strictly tree-shaped: a notebook owns its pages, a page its
/// layers, a layer its strokes, a stroke its points. The structure is
/// immutable once decode completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    pub pages: Vec<Page>,
}

impl Notebook {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One page. Its index within the notebook is significant and preserved
/// end-to-end through rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub layers: Vec<Layer>,
}

/// One drawing layer; later layers composite on top of earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub strokes: Vec<Stroke>,
}

/// One continuous pen gesture.
///
/// `width` is taken verbatim from the stream and may be zero or negative in
/// corrupt input; clamping to a visible width is the renderer's job, not the
/// decoder's. A stroke with no points is valid and renders as a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub pen: PenKind,
    pub color: StrokeColor,
    pub width: f32,
    pub points: Vec<StrokePoint>,
}

/// One sampled location along a stroke. Pressure and tilt are recorded but
/// do not affect rendered geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
    pub pressure: f32,
    pub tilt: f32,
}
