//! Single-pass decoder for the nested notebook record structure.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::model::{Layer, Notebook, Page, Stroke, StrokePoint};
use crate::style::{PenKind, StrokeColor};
use inkpress_traits::CancelToken;
use log::debug;

/// Size of the opaque format preamble. Skipped, never interpreted.
pub const HEADER_LEN: usize = 43;

/// Declared counts are untrusted input; cap preallocation so a corrupt
/// count cannot balloon memory before the truncation check trips.
const PREALLOC_CAP: u32 = 4096;

fn prealloc(declared: u32) -> usize {
    declared.min(PREALLOC_CAP) as usize
}

/// Walks the fixed little-endian layout in one linear pass:
/// preamble, page count, then per page → layer → stroke → point records.
///
/// Any read that cannot be satisfied aborts the entire decode; no partial
/// notebook is ever produced. The walk is pure iteration, so document size
/// never translates into call-stack depth.
pub struct NotebookDecoder<'a> {
    cursor: ByteCursor<'a>,
    cancel: CancelToken,
}

impl<'a> NotebookDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_cancel(data, CancelToken::new())
    }

    pub fn with_cancel(data: &'a [u8], cancel: CancelToken) -> Self {
        Self {
            cursor: ByteCursor::new(data),
            cancel,
        }
    }

    pub fn decode(mut self) -> Result<Notebook, DecodeError> {
        self.cursor.skip(HEADER_LEN)?;
        let page_count = self.cursor.read_u32_le()?;
        debug!(
            "decoding notebook: {page_count} page(s) declared, {} byte(s) remaining",
            self.cursor.remaining()
        );

        let mut pages = Vec::with_capacity(prealloc(page_count));
        for _ in 0..page_count {
            pages.push(self.read_page()?);
        }
        Ok(Notebook { pages })
    }

    fn read_page(&mut self) -> Result<Page, DecodeError> {
        let layer_count = self.cursor.read_u32_le()?;
        let mut layers = Vec::with_capacity(prealloc(layer_count));
        for _ in 0..layer_count {
            layers.push(self.read_layer()?);
        }
        Ok(Page { layers })
    }

    fn read_layer(&mut self) -> Result<Layer, DecodeError> {
        let stroke_count = self.cursor.read_u32_le()?;
        let mut strokes = Vec::with_capacity(prealloc(stroke_count));
        for _ in 0..stroke_count {
            if self.cancel.is_cancelled() {
                return Err(DecodeError::Cancelled);
            }
            strokes.push(self.read_stroke()?);
        }
        Ok(Layer { strokes })
    }

    fn read_stroke(&mut self) -> Result<Stroke, DecodeError> {
        let pen = PenKind::from_raw(self.cursor.read_u32_le()?);
        let color = StrokeColor::from_raw(self.cursor.read_u32_le()?);
        self.cursor.skip(4)?; // reserved
        let width = self.cursor.read_f32_le()?;
        self.cursor.skip(4)?; // reserved
        let point_count = self.cursor.read_u32_le()?;

        let mut points = Vec::with_capacity(prealloc(point_count));
        for _ in 0..point_count {
            points.push(self.read_point()?);
        }
        Ok(Stroke {
            pen,
            color,
            width,
            points,
        })
    }

    fn read_point(&mut self) -> Result<StrokePoint, DecodeError> {
        let x = self.cursor.read_f32_le()?;
        let y = self.cursor.read_f32_le()?;
        let pressure = self.cursor.read_f32_le()?;
        let tilt = self.cursor.read_f32_le()?;
        self.cursor.skip(8)?; // two reserved f32 fields
        Ok(StrokePoint {
            x,
            y,
            pressure,
            tilt,
        })
    }
}

/// Decode a notebook without cancellation support.
pub fn decode_notebook(bytes: &[u8]) -> Result<Notebook, DecodeError> {
    NotebookDecoder::new(bytes).decode()
}
