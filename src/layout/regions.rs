use kurbo::{Point, Rect};

use crate::foundation::core::Canvas;
use crate::foundation::error::{FlowError, FlowResult};

/// One rectangular lane of the canvas, owning its own set of guide segments.
///
/// Invariant: `x0 < x1`, `y0 < y1`. Created once at startup, immutable
/// thereafter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Region {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> FlowResult<Self> {
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return Err(FlowError::validation("region bounds must be finite"));
        }
        if x0 >= x1 || y0 >= y1 {
            return Err(FlowError::validation(
                "region must satisfy x0 < x1 and y0 < y1",
            ));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }

    /// Region bounds shrunk by `margin` on every side. Collapses to the
    /// center when the margin exceeds the half-extent, never inverts.
    pub fn inner(&self, margin: f64) -> Rect {
        let cx = (self.x0 + self.x1) * 0.5;
        let cy = (self.y0 + self.y1) * 0.5;
        Rect::new(
            (self.x0 + margin).min(cx),
            (self.y0 + margin).min(cy),
            (self.x1 - margin).max(cx),
            (self.y1 - margin).max(cy),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

/// The fixed ordered sequence of lanes plus the canvas they sit in.
///
/// Lanes are ordered left-to-right and non-overlapping; the gaps between
/// them (and the outer border) are painted over after stroking, so noise
/// displacement never visually bleeds outside a lane.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionLayout {
    canvas: Canvas,
    regions: Vec<Region>,
}

impl RegionLayout {
    pub fn new(canvas: Canvas, regions: Vec<Region>) -> FlowResult<Self> {
        if regions.is_empty() {
            return Err(FlowError::validation("layout needs at least one region"));
        }
        for r in &regions {
            if r.x0 < 0.0
                || r.y0 < 0.0
                || r.x1 > canvas.width_f64()
                || r.y1 > canvas.height_f64()
            {
                return Err(FlowError::validation("region outside canvas bounds"));
            }
        }
        for pair in regions.windows(2) {
            if pair[0].x1 > pair[1].x0 {
                return Err(FlowError::validation(
                    "regions must be ordered left-to-right and non-overlapping",
                ));
            }
        }
        Ok(Self { canvas, regions })
    }

    /// The banner layout of the artwork: six 100x450 lanes across a 1000x500
    /// canvas, 25px outer border, 50px gaps.
    pub fn banner() -> Self {
        let regions = (0..6)
            .map(|i| {
                let x0 = 75.0 + 150.0 * f64::from(i);
                Region {
                    x0,
                    y0: 25.0,
                    x1: x0 + 100.0,
                    y1: 475.0,
                }
            })
            .collect();
        Self {
            canvas: Canvas {
                width: 1000,
                height: 500,
            },
            regions,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Masking rectangles painted (in the background color) over everything
    /// that is not a lane: the bands above and below the lanes, the area left
    /// of the first lane, the gaps, and the area right of the last lane.
    pub fn mask_rects(&self) -> Vec<Rect> {
        let w = self.canvas.width_f64();
        let h = self.canvas.height_f64();
        let band_y0 = self
            .regions
            .iter()
            .map(|r| r.y0)
            .fold(f64::INFINITY, f64::min);
        let band_y1 = self
            .regions
            .iter()
            .map(|r| r.y1)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut masks = Vec::with_capacity(self.regions.len() + 3);
        masks.push(Rect::new(0.0, 0.0, w, band_y0));
        masks.push(Rect::new(0.0, band_y1, w, h));
        masks.push(Rect::new(0.0, band_y0, self.regions[0].x0, band_y1));
        for pair in self.regions.windows(2) {
            masks.push(Rect::new(pair[0].x1, band_y0, pair[1].x0, band_y1));
        }
        let last = self.regions[self.regions.len() - 1];
        masks.push(Rect::new(last.x1, band_y0, w, band_y1));
        masks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/regions.rs"]
mod tests;
