use std::collections::BTreeMap;

use kurbo::Point;

/// Implicit line `a*x + b*y + c = 0` derived from two endpoints.
///
/// Used only transiently during seeding to test which half-plane a point
/// falls in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    pub fn from_endpoints(p1: Point, p2: Point) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// Signed side value; the positive half-plane sets the partition bit.
    pub fn side(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }
}

/// A random probe point with the half-plane cell it falls in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub pos: Point,
    /// Bit `j` is set iff the point lies on the positive side of line `j`.
    pub cell: u32,
}

/// Incremental half-plane partitioner for one region.
///
/// Effectively a small dynamic BSP: each accepted guide line adds one
/// half-plane test, doubling the number of potential cells. No tree is
/// needed; line counts are bounded by the lines-per-region control, far
/// below the 32-bit cell mask.
#[derive(Clone, Debug, Default)]
pub struct SpacePartitioner {
    lines: Vec<LineEquation>,
}

impl SpacePartitioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, eq: LineEquation) {
        debug_assert!(self.lines.len() < 32, "cell mask width exceeded");
        self.lines.push(eq);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[LineEquation] {
        &self.lines
    }

    /// Cell bitmask of `p` against all accumulated lines.
    pub fn cell_of(&self, p: Point) -> u32 {
        let mut cell = 0u32;
        for (j, line) in self.lines.iter().enumerate() {
            if line.side(p) > 0.0 {
                cell |= 1 << j;
            }
        }
        cell
    }

    pub fn classify(&self, points: &[Point]) -> Vec<SamplePoint> {
        points
            .iter()
            .map(|&pos| SamplePoint {
                pos,
                cell: self.cell_of(pos),
            })
            .collect()
    }

    /// The most populous cell among `points` and its members.
    ///
    /// Ties break toward the lowest numeric cell id, which keeps seeding
    /// reproducible for a fixed random source.
    pub fn densest_cell(&self, points: &[Point]) -> (u32, Vec<Point>) {
        let classified = self.classify(points);
        let mut counts = BTreeMap::<u32, usize>::new();
        for sp in &classified {
            *counts.entry(sp.cell).or_insert(0) += 1;
        }

        let mut best_cell = 0u32;
        let mut best_count = 0usize;
        // Ascending id iteration + strict greater-than = lowest id wins ties.
        for (&cell, &count) in &counts {
            if count > best_count {
                best_count = count;
                best_cell = cell;
            }
        }

        let members = classified
            .into_iter()
            .filter(|sp| sp.cell == best_cell)
            .map(|sp| sp.pos)
            .collect();
        (best_cell, members)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seeding/partition.rs"]
mod tests;
