//! Builders for raw notebook byte buffers in the wire layout:
//! fixed opaque preamble, then little-endian length-prefixed
//! page → layer → stroke → point records.

use inkpress::notebook::HEADER_LEN;

pub struct StrokeSpec {
    pub pen: u32,
    pub color: u32,
    pub width: f32,
    pub points: Vec<(f32, f32)>,
}

/// A stroke with pressure/tilt defaulted in the encoder.
pub fn stroke(pen: u32, color: u32, width: f32, points: &[(f32, f32)]) -> StrokeSpec {
    StrokeSpec {
        pen,
        color,
        width,
        points: points.to_vec(),
    }
}

#[derive(Default)]
pub struct LayerSpec {
    pub strokes: Vec<StrokeSpec>,
}

pub fn layer(strokes: Vec<StrokeSpec>) -> LayerSpec {
    LayerSpec { strokes }
}

#[derive(Default)]
pub struct PageSpec {
    pub layers: Vec<LayerSpec>,
}

/// A page with a single layer holding the given strokes.
pub fn page_with(strokes: Vec<StrokeSpec>) -> PageSpec {
    PageSpec {
        layers: vec![layer(strokes)],
    }
}

#[derive(Default)]
pub struct NotebookBuilder {
    pages: Vec<PageSpec>,
}

impl NotebookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: PageSpec) -> Self {
        self.pages.push(page);
        self
    }

    pub fn blank_pages(mut self, n: usize) -> Self {
        for _ in 0..n {
            self.pages.push(PageSpec::default());
        }
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_LEN];
        put_u32(&mut buf, self.pages.len() as u32);
        for page in &self.pages {
            put_u32(&mut buf, page.layers.len() as u32);
            for layer in &page.layers {
                put_u32(&mut buf, layer.strokes.len() as u32);
                for stroke in &layer.strokes {
                    put_u32(&mut buf, stroke.pen);
                    put_u32(&mut buf, stroke.color);
                    put_u32(&mut buf, 0); // reserved
                    put_f32(&mut buf, stroke.width);
                    put_u32(&mut buf, 0); // reserved
                    put_u32(&mut buf, stroke.points.len() as u32);
                    for &(x, y) in &stroke.points {
                        put_f32(&mut buf, x);
                        put_f32(&mut buf, y);
                        put_f32(&mut buf, 1.0); // pressure
                        put_f32(&mut buf, 0.0); // tilt
                        put_f32(&mut buf, 0.0); // reserved
                        put_f32(&mut buf, 0.0); // reserved
                    }
                }
            }
        }
        buf
    }
}

fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn put_f32(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// Scenario fixture: one page, one layer, one black ballpoint stroke of
/// width 2 visiting (0,0) → (10,0) → (10,10).
pub fn single_stroke_notebook() -> Vec<u8> {
    NotebookBuilder::new()
        .page(page_with(vec![stroke(0, 0, 2.0, &[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
        ])]))
        .encode()
}
