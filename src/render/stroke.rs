use std::f64::consts::FRAC_PI_2;

use kurbo::Point;

use crate::animation::ease::Ease;
use crate::foundation::math::{lerp, smooth_abs};
use crate::noise::field::NoiseField;
use crate::params::table::{ParameterSet, keys};
use crate::render::frame::{Frame, Primitive};
use crate::seeding::generator::Segment;

/// Interpolation steps walked along every segment.
pub const STROKE_STEPS: usize = 1000;

/// Reference length for deriving the visible-line cadence: shorter segments
/// connect their rails more often.
const REF_LENGTH: f64 = 200.0;
/// Perpendicular displacement scale in pixels.
const DISPLACEMENT: f64 = 100.0;
/// Stroke weight (and dot size) per unit of folded noise.
const WEIGHT_SCALE: f64 = 3.0;

const NOISE_SCALE_X: f64 = 0.008;
const NOISE_SCALE_STEP: f64 = 0.002;
const RAIL1_TIME_SCALE: f64 = 0.1;
/// Large fixed time offset decorrelating the second rail from the first.
const RAIL2_TIME_OFFSET: f64 = 2054.0;
const RAIL2_TIME_SCALE: f64 = 0.001;

/// Fraction of the walk tapered at each end of the stroke.
const TAPER: f64 = 0.1;

/// Walks guide segments and emits noise-perturbed stroke primitives.
///
/// Consulted every frame with a read-only parameter snapshot; holds no
/// mutable state, so frames are reproducible for a fixed noise field and
/// elapsed time.
pub struct StrokeRenderer<'a> {
    noise: &'a NoiseField,
    time_multiplier: f64,
}

impl<'a> StrokeRenderer<'a> {
    pub fn new(noise: &'a NoiseField, params: &ParameterSet) -> Self {
        Self {
            noise,
            time_multiplier: params.get(keys::TIME_MULTIPLIER),
        }
    }

    /// Emit the primitives for one segment at `elapsed` seconds into `frame`.
    ///
    /// Every step emits two displaced dots (one per noise rail); steps on the
    /// segment's cadence also connect the rails with a line whose weight
    /// tracks local noise intensity. Zero-length segments degrade to
    /// coincident degenerate primitives.
    pub fn emit(&self, segment: &Segment, elapsed: f64, frame: &mut Frame) {
        let time = self.time_multiplier * elapsed;
        let start = segment.start;
        let end = segment.end;
        let length = segment.length();
        let cadence = step_frequency(length, segment.step_factor);

        let angle = (end.y - start.y).atan2(end.x - start.x);
        let perp = angle + FRAC_PI_2;
        let (perp_cos, perp_sin) = (perp.cos(), perp.sin());

        for i in 0..STROKE_STEPS {
            let f = i as f64 / STROKE_STEPS as f64;
            let x = lerp(start.x, end.x, f);
            let y = lerp(start.y, end.y, f);

            let rail1 = smooth_abs(self.noise.sample(
                x * NOISE_SCALE_X,
                i as f64 * NOISE_SCALE_STEP,
                time * RAIL1_TIME_SCALE,
            ));
            let rail2 = rail1
                + smooth_abs(self.noise.sample(
                    x * NOISE_SCALE_X,
                    i as f64 * NOISE_SCALE_STEP,
                    (time + RAIL2_TIME_OFFSET) * RAIL2_TIME_SCALE,
                ));

            let ribbon_mag = lerp(rail1, rail2, ribbon_blend_weight(i));
            let guide_mag = guide_rail_magnitude(i, rail1, rail2);

            let ribbon = Point::new(
                x + perp_cos * ribbon_mag * DISPLACEMENT,
                y + perp_sin * ribbon_mag * DISPLACEMENT,
            );
            let guide = Point::new(
                x + perp_cos * guide_mag * DISPLACEMENT,
                y + perp_sin * guide_mag * DISPLACEMENT,
            );

            let intensity = rail1 * WEIGHT_SCALE;
            frame.push(Primitive::Dot {
                center: guide,
                size: intensity,
                color: segment.color,
            });
            frame.push(Primitive::Dot {
                center: ribbon,
                size: intensity,
                color: segment.color,
            });
            if i % cadence == 0 {
                frame.push(Primitive::Line {
                    from: guide,
                    to: ribbon,
                    weight: intensity,
                    color: segment.color,
                });
            }
        }
    }
}

/// How many interpolation indices pass between visible connecting lines.
///
/// Never below 1, and finite even for degenerate zero-length segments.
fn step_frequency(length: f64, step_factor: f64) -> usize {
    let raw = (REF_LENGTH / length.max(f64::EPSILON)) * step_factor;
    if raw.is_finite() {
        (raw.ceil().max(1.0)).min(u32::MAX as f64) as usize
    } else {
        1
    }
}

/// Blend weight toward the second rail for the ribbon dots.
///
/// Eases 0 -> 1 over the first 10% of steps, holds at 1 through the middle,
/// and eases back 1 -> 0 over the last 10%, so the stroke tapers into the
/// straight guide line at both ends.
fn ribbon_blend_weight(i: usize) -> f64 {
    let steps = STROKE_STEPS as f64;
    let window = steps * TAPER;
    let i = i as f64;
    if i < window {
        Ease::InOutCubic.apply(i / window)
    } else if i > steps - window {
        Ease::InOutCubic.apply((steps - i) / window)
    } else {
        1.0
    }
}

/// Displacement magnitude for the guide-rail dot.
///
/// Rides the first rail for most of the walk; over the last 10% it eases
/// toward the second rail, giving the paired dots a slightly offset taper at
/// the stroke's tail.
fn guide_rail_magnitude(i: usize, rail1: f64, rail2: f64) -> f64 {
    let steps = STROKE_STEPS as f64;
    let window = steps * TAPER;
    let i = i as f64;
    if i > steps - window {
        let out = Ease::InOutCubic.apply((steps - i) / window);
        lerp(rail2, rail1, out)
    } else {
        rail1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/stroke.rs"]
mod tests;
