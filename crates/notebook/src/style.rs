//! Raw style-code resolution.
//!
//! The upstream device format can grow new pen and color codes over time.
//! Geometry is still fully known for such strokes, so unrecognized codes
//! resolve to a default variant instead of failing the conversion; only
//! structural truncation is treated as fatal.

use inkpress_types::Color;

/// Closed set of known pen kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenKind {
    #[default]
    Ballpoint,
    Fineliner,
    Marker,
    Pencil,
    Brush,
    Highlighter,
    Eraser,
    MechanicalPencil,
    Pen,
}

impl PenKind {
    /// Total mapping from an arbitrary raw code; unknown codes become
    /// [`PenKind::Ballpoint`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => PenKind::Ballpoint,
            1 => PenKind::Fineliner,
            2 => PenKind::Marker,
            3 => PenKind::Pencil,
            4 => PenKind::Brush,
            5 => PenKind::Highlighter,
            6 => PenKind::Eraser,
            7 => PenKind::MechanicalPencil,
            8 => PenKind::Pen,
            _ => PenKind::Ballpoint,
        }
    }
}

/// Closed set of known stroke colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrokeColor {
    #[default]
    Black,
    Gray,
    White,
    Yellow,
    Green,
    Pink,
    Blue,
    Red,
    GrayOverlay,
}

impl StrokeColor {
    /// Total mapping from an arbitrary raw code; unknown codes become
    /// [`StrokeColor::Black`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => StrokeColor::Black,
            1 => StrokeColor::Gray,
            2 => StrokeColor::White,
            3 => StrokeColor::Yellow,
            4 => StrokeColor::Green,
            5 => StrokeColor::Pink,
            6 => StrokeColor::Blue,
            7 => StrokeColor::Red,
            8 => StrokeColor::GrayOverlay,
            _ => StrokeColor::Black,
        }
    }

    /// Concrete RGB value used for rendering this color.
    pub fn rgb(self) -> Color {
        match self {
            StrokeColor::Black => Color::BLACK,
            StrokeColor::Gray => Color::gray(125),
            StrokeColor::White => Color::WHITE,
            StrokeColor::Yellow => Color::rgb(255, 235, 59),
            StrokeColor::Green => Color::rgb(76, 175, 80),
            StrokeColor::Pink => Color::rgb(233, 30, 99),
            StrokeColor::Blue => Color::rgb(33, 150, 243),
            StrokeColor::Red => Color::rgb(244, 67, 54),
            // Lighter than Gray so the two stay distinguishable.
            StrokeColor::GrayOverlay => Color::gray(191),
        }
    }
}
