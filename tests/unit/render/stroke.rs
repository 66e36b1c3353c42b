use super::*;

use crate::{Canvas, NoiseConfig, ParamSpec, Rgba8};

fn field() -> NoiseField {
    NoiseField::new(NoiseConfig {
        seed: 1,
        octaves: 2,
        falloff: 0.5,
    })
}

fn params_with_time(tm: f64) -> ParameterSet {
    ParameterSet::empty().with(keys::TIME_MULTIPLIER, ParamSpec::new(0.0, 10.0, 0.0, tm))
}

fn empty_frame() -> Frame {
    Frame::new(Canvas::new(200, 200).unwrap(), Rgba8::PAPER)
}

fn horizontal_segment() -> Segment {
    Segment {
        start: Point::new(50.0, 100.0),
        end: Point::new(150.0, 100.0),
        step_factor: 10.0,
        color: Rgba8::INK,
    }
}

#[test]
fn cadence_scales_with_segment_length() {
    assert_eq!(step_frequency(200.0, 10.0), 10);
    assert_eq!(step_frequency(100.0, 10.0), 20);
    assert_eq!(step_frequency(400.0, 10.0), 5);
    // Degenerate lengths still give a usable, finite cadence.
    assert!(step_frequency(0.0, 10.0) >= 1);
    assert!(step_frequency(1e-300, 40.0) >= 1);
}

#[test]
fn ribbon_blend_tapers_at_both_ends() {
    assert_eq!(ribbon_blend_weight(0), 0.0);
    assert_eq!(ribbon_blend_weight(100), 1.0);
    assert_eq!(ribbon_blend_weight(500), 1.0);
    assert!((ribbon_blend_weight(950) - 0.5).abs() < 1e-12);
    assert!(ribbon_blend_weight(999) < 1e-3);
}

#[test]
fn guide_rail_swaps_toward_the_second_rail_at_the_tail() {
    assert_eq!(guide_rail_magnitude(0, 0.2, 0.9), 0.2);
    assert_eq!(guide_rail_magnitude(500, 0.2, 0.9), 0.2);
    // Near the very end the guide dot rides the second rail.
    assert!((guide_rail_magnitude(999, 0.2, 0.9) - 0.9).abs() < 1e-4);
}

#[test]
fn emit_produces_two_dots_per_step_and_lines_on_cadence() {
    let noise = field();
    let params = params_with_time(0.001);
    let renderer = StrokeRenderer::new(&noise, &params);
    let mut frame = empty_frame();
    renderer.emit(&horizontal_segment(), 0.5, &mut frame);

    let dots = frame
        .ops
        .iter()
        .filter(|op| matches!(op, Primitive::Dot { .. }))
        .count();
    let lines = frame
        .ops
        .iter()
        .filter(|op| matches!(op, Primitive::Line { .. }))
        .count();
    assert_eq!(dots, 2 * STROKE_STEPS);
    // Length 100, step factor 10: a connecting line every 20 steps.
    assert_eq!(lines, STROKE_STEPS / 20);
    assert_eq!(frame.ops.len(), dots + lines);
}

#[test]
fn displacement_is_perpendicular_and_bounded() {
    let noise = field();
    let params = params_with_time(0.001);
    let renderer = StrokeRenderer::new(&noise, &params);
    let mut frame = empty_frame();
    renderer.emit(&horizontal_segment(), 0.0, &mut frame);

    for op in &frame.ops {
        if let Primitive::Dot { center, size, .. } = op {
            // Horizontal guide: all displacement goes into +y. The folded
            // noise floor keeps every dot off the guide line.
            assert!(center.y > 100.0);
            assert!(center.y < 100.0 + 110.0);
            assert!(center.x > 49.0 && center.x < 151.0);
            assert!(*size > 0.0 && *size < 3.1);
        }
    }
}

#[test]
fn ribbon_and_guide_coincide_only_at_the_head() {
    let noise = field();
    let params = params_with_time(0.001);
    let renderer = StrokeRenderer::new(&noise, &params);
    let mut frame = empty_frame();
    renderer.emit(&horizontal_segment(), 0.25, &mut frame);

    let centers: Vec<Point> = frame
        .ops
        .iter()
        .filter_map(|op| match op {
            Primitive::Dot { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    assert_eq!(centers.len(), 2 * STROKE_STEPS);

    let pair = |i: usize| (centers[2 * i], centers[2 * i + 1]);

    // Step 0: blend weight is zero, the two rails start together.
    let (g, r) = pair(0);
    assert!(g.distance(r) < 1e-6);
    // Mid-walk the second rail is a full folded-noise term away, which the
    // smooth fold bounds below by 0.1 (so 10px after displacement scaling).
    let (g, r) = pair(500);
    assert!(g.distance(r) >= 9.9);
    // At the tail the rails swap rather than collapse; separation persists.
    let (g, r) = pair(999);
    assert!(g.distance(r) >= 9.8);
}

#[test]
fn zero_time_multiplier_freezes_the_stroke() {
    let noise = field();
    let params = params_with_time(0.0);
    let renderer = StrokeRenderer::new(&noise, &params);
    let segment = horizontal_segment();

    let mut early = empty_frame();
    renderer.emit(&segment, 0.0, &mut early);
    let mut late = empty_frame();
    renderer.emit(&segment, 100.0, &mut late);
    assert_eq!(early.ops, late.ops);
}

#[test]
fn zero_length_segment_degrades_gracefully() {
    let noise = field();
    let params = params_with_time(0.001);
    let renderer = StrokeRenderer::new(&noise, &params);
    let mut frame = empty_frame();
    let segment = Segment {
        start: Point::new(80.0, 80.0),
        end: Point::new(80.0, 80.0),
        step_factor: 10.0,
        color: Rgba8::BLACK,
    };
    renderer.emit(&segment, 0.0, &mut frame);
    // Huge cadence: only step 0 connects the rails.
    assert_eq!(frame.ops.len(), 2 * STROKE_STEPS + 1);
}
