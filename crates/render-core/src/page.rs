//! Per-page renderer: layered strokes → vector paths.

use crate::types::{LineCap, LineJoin, VectorPage, VectorPath};
use inkpress_notebook::Page;
use inkpress_types::{Point, Size};
use log::trace;

/// Native page resolution of the source device, in canvas units. Every page
/// renders on this canvas regardless of stroke extent; pages are never
/// cropped or rescaled to content.
pub const PAGE_SIZE: Size = Size {
    width: 1404.0,
    height: 1872.0,
};

/// Smallest width a stroke renders at. A zero or negative stored width is a
/// known corruption symptom, not an intentional invisible stroke.
pub const MIN_STROKE_WIDTH: f32 = 1.0;

/// Render one page's layered strokes into paths on the fixed canvas.
///
/// Layers emit in stored order (first at the bottom), strokes within a
/// layer in stored order. Zero-point strokes contribute nothing. Reads only
/// the given page; deterministic for identical input.
pub fn render_page(page: &Page) -> VectorPage {
    let mut paths = Vec::new();
    for layer in &page.layers {
        for stroke in &layer.strokes {
            if stroke.points.is_empty() {
                continue;
            }
            paths.push(VectorPath {
                points: stroke
                    .points
                    .iter()
                    .map(|p| Point::new(p.x, p.y))
                    .collect(),
                width: if stroke.width > 0.0 {
                    stroke.width
                } else {
                    MIN_STROKE_WIDTH
                },
                color: stroke.color.rgb(),
                cap: LineCap::Round,
                join: LineJoin::Round,
            });
        }
    }
    trace!(
        "rendered page: {} layer(s) -> {} path(s)",
        page.layers.len(),
        paths.len()
    );
    VectorPage {
        size: PAGE_SIZE,
        paths,
    }
}
