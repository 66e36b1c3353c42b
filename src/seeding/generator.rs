use kurbo::{Point, Rect};

use crate::foundation::core::Rgba8;
use crate::foundation::math::Rng64;
use crate::layout::regions::{Region, RegionLayout};
use crate::params::table::{ParameterSet, keys};
use crate::seeding::partition::{LineEquation, SpacePartitioner};

/// Seeding pad: endpoints stay this far inside their region.
pub(crate) const INNER_MARGIN: f64 = 25.0;

/// Attempt cap for the unconstrained first segment of a region.
const FIRST_SEGMENT_ATTEMPTS: u32 = 50;
/// Attempt cap when pairing points out of the densest cell.
const PAIR_ATTEMPTS: u32 = 30;
/// Probe points classified per subsequent segment.
const SAMPLE_POINTS: usize = 100;

const STEP_FACTOR_MIN: f64 = 10.0;
const STEP_FACTOR_MAX: f64 = 40.0;

/// One guide line with its per-stroke knobs.
///
/// `step_factor` controls how often a visible connecting line (as opposed to
/// only point markers) is emitted along the stroke walk.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub step_factor: f64,
    pub color: Rgba8,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Guide segments grouped per layout region, in placement order.
///
/// Immutable after setup; a region may hold fewer segments than requested
/// when its partition cells ran out of candidate points.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeedList {
    per_region: Vec<Vec<Segment>>,
}

impl SeedList {
    pub fn region(&self, idx: usize) -> &[Segment] {
        self.per_region.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn region_count(&self) -> usize {
        self.per_region.len()
    }

    /// All segments in seed order (draw order).
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.per_region.iter().flatten()
    }

    /// Total segment count across regions.
    pub fn len(&self) -> usize {
        self.per_region.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Place guide segments for every region of `layout`.
///
/// Consulted once, at setup. The caller owns the random source so seeding is
/// reproducible: identical layout, parameters and source state yield an
/// identical seed list.
#[tracing::instrument(skip_all, fields(regions = layout.regions().len()))]
pub fn generate_seeds(layout: &RegionLayout, params: &ParameterSet, rng: &mut Rng64) -> SeedList {
    let lines_per_region = (params.get(keys::LINES_PER_REGION).floor() as usize).max(1);
    let (min_len, max_len) = length_band(params);

    let per_region = layout
        .regions()
        .iter()
        .map(|region| seed_region(region, lines_per_region, min_len, max_len, rng))
        .collect();
    SeedList { per_region }
}

fn length_band(params: &ParameterSet) -> (f64, f64) {
    let lo = params.get(keys::LINE_MIN_LENGTH);
    let hi = params.get(keys::LINE_MAX_LENGTH);
    if lo <= hi { (lo, hi) } else { (hi, lo) }
}

fn seed_region(
    region: &Region,
    count: usize,
    min_len: f64,
    max_len: f64,
    rng: &mut Rng64,
) -> Vec<Segment> {
    let bounds = region.inner(INNER_MARGIN);
    let mut partitioner = SpacePartitioner::new();
    let mut segments = Vec::with_capacity(count);

    for slot in 0..count {
        let placed = if slot == 0 {
            Some(first_segment(&bounds, min_len, max_len, rng))
        } else {
            next_segment(&partitioner, &bounds, min_len, max_len, rng)
        };

        match placed {
            Some((start, end)) => {
                // Record the equation before the next slot so constraints
                // accumulate.
                partitioner.push(LineEquation::from_endpoints(start, end));
                segments.push(Segment {
                    start,
                    end,
                    step_factor: rng.next_range(STEP_FACTOR_MIN, STEP_FACTOR_MAX),
                    color: Rgba8::BLACK.lerp(Rgba8::INK, rng.next_f64_01()),
                });
            }
            None => {
                tracing::debug!(slot, "segment slot skipped: densest cell too sparse");
            }
        }
    }
    segments
}

fn random_point_in(bounds: &Rect, rng: &mut Rng64) -> Point {
    Point::new(
        rng.next_range(bounds.x0, bounds.x1),
        rng.next_range(bounds.y0, bounds.y1),
    )
}

/// Reject-sample an endpoint pair until its distance falls in the length
/// band. On cap exhaustion one final unconstrained pair is accepted; a short
/// first segment beats an empty region.
fn first_segment(bounds: &Rect, min_len: f64, max_len: f64, rng: &mut Rng64) -> (Point, Point) {
    for _ in 0..FIRST_SEGMENT_ATTEMPTS {
        let a = random_point_in(bounds, rng);
        let b = random_point_in(bounds, rng);
        let dist = a.distance(b);
        if dist >= min_len && dist <= max_len {
            return (a, b);
        }
    }
    tracing::warn!(
        attempts = FIRST_SEGMENT_ATTEMPTS,
        "length band not met; accepting an unconstrained pair"
    );
    (random_point_in(bounds, rng), random_point_in(bounds, rng))
}

/// Place a subsequent segment inside the most populous partition cell.
///
/// Probe points are classified against every previously placed line; the
/// densest cell restricts the candidate endpoints, which spreads segments
/// across the region instead of letting them cluster. Returns `None` when
/// fewer than two distinct candidates exist.
fn next_segment(
    partitioner: &SpacePartitioner,
    bounds: &Rect,
    min_len: f64,
    max_len: f64,
    rng: &mut Rng64,
) -> Option<(Point, Point)> {
    let probes: Vec<Point> = (0..SAMPLE_POINTS)
        .map(|_| random_point_in(bounds, rng))
        .collect();
    let (_, candidates) = partitioner.densest_cell(&probes);
    if candidates.len() < 2 {
        return None;
    }

    let mut last_pair = None;
    for _ in 0..PAIR_ATTEMPTS {
        let i = rng.next_index(candidates.len());
        let mut j = rng.next_index(candidates.len());
        while j == i {
            j = rng.next_index(candidates.len());
        }
        let (a, b) = (candidates[i], candidates[j]);
        let dist = a.distance(b);
        last_pair = Some((a, b));
        if dist >= min_len && dist <= max_len {
            return last_pair;
        }
    }
    // Cap exhausted: commit the final sampled pair regardless of length.
    last_pair
}

#[cfg(test)]
#[path = "../../tests/unit/seeding/generator.rs"]
mod tests;
