use inkpress_types::{Color, Point, Size};
use serde::{Deserialize, Serialize};

/// PDF-style line cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// PDF-style line join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// One continuous stroked path visiting its points in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    pub points: Vec<Point>,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// Vector geometry for one page on its fixed-size canvas.
///
/// Paths are listed in compositing order: first at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPage {
    pub size: Size,
    pub paths: Vec<VectorPath>,
}

/// The assembled output: ordered page geometry for a whole notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDocument {
    pub pages: Vec<VectorPage>,
}

impl VectorDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
