use crate::foundation::core::Rgba8;
use crate::layout::regions::RegionLayout;
use crate::noise::field::NoiseField;
use crate::params::table::ParameterSet;
use crate::render::frame::{Frame, Primitive};
use crate::render::stroke::StrokeRenderer;
use crate::seeding::generator::SeedList;

/// Border stroke width around each lane.
const BORDER_WEIGHT: f64 = 2.0;

/// Assemble the full drawable frame for `elapsed` seconds.
///
/// Painter's order: lane borders, then every stroke in seed order (later
/// segments draw on top), then background-colored masks over all non-lane
/// area so displacement overshoot is clipped visually without geometric
/// clipping.
#[tracing::instrument(skip_all, fields(segments = seeds.len()))]
pub fn compose_frame(
    layout: &RegionLayout,
    seeds: &SeedList,
    noise: &NoiseField,
    params: &ParameterSet,
    elapsed: f64,
) -> Frame {
    let mut frame = Frame::new(layout.canvas(), Rgba8::PAPER);

    for region in layout.regions() {
        frame.push(Primitive::RectStroke {
            rect: region.rect(),
            weight: BORDER_WEIGHT,
            color: Rgba8::INK,
        });
    }

    let renderer = StrokeRenderer::new(noise, params);
    for segment in seeds.iter() {
        renderer.emit(segment, elapsed, &mut frame);
    }

    for rect in layout.mask_rects() {
        frame.push(Primitive::RectFill {
            rect,
            color: frame.background,
        });
    }

    frame
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
