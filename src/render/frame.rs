use kurbo::{Point, Rect};

use crate::foundation::core::{Canvas, Rgba8};

/// One drawable primitive of a presented frame.
///
/// Degenerate primitives (zero-length lines, zero-size dots) are legal; the
/// raster backend draws nothing for them rather than failing.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Dot {
        center: Point,
        /// Diameter in pixels.
        size: f64,
        color: Rgba8,
    },
    Line {
        from: Point,
        to: Point,
        weight: f64,
        color: Rgba8,
    },
    RectFill {
        rect: Rect,
        color: Rgba8,
    },
    RectStroke {
        rect: Rect,
        weight: f64,
        color: Rgba8,
    },
}

/// Ordered primitive list for one presented frame.
///
/// Produced fresh every refresh and not retained; order is painter's order
/// (later primitives draw on top).
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub ops: Vec<Primitive>,
}

impl Frame {
    pub fn new(canvas: Canvas, background: Rgba8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: Primitive) {
        self.ops.push(op);
    }
}
