use crate::foundation::error::FlowResult;
use crate::foundation::math::Rng64;
use crate::layout::regions::RegionLayout;
use crate::noise::field::{NoiseConfig, NoiseField};
use crate::params::table::{ParameterSet, keys};
use crate::render::compositor::compose_frame;
use crate::render::frame::Frame;
use crate::render::raster::{FrameRGBA, rasterize};
use crate::seeding::generator::{SeedList, generate_seeds};

/// A seeded sketch instance: fixed layout, parameter snapshot, noise field
/// and seed list.
///
/// The pipeline has exactly two states: *uninitialized* (no instance) and
/// *seeded* (this struct). [`Sketch::seed`] is the one-shot transition;
/// there is no way back. Switching parameter presets means dropping the
/// instance and seeding a fresh one, so a replaced sketch can never leave
/// partially-drawn state visible.
#[derive(Clone, Debug)]
pub struct Sketch {
    layout: RegionLayout,
    params: ParameterSet,
    noise: NoiseField,
    seeds: SeedList,
}

impl Sketch {
    /// Seed a sketch from a layout and a parameter snapshot.
    ///
    /// All randomness derives from `seed`, so identical inputs reproduce the
    /// artwork exactly.
    #[tracing::instrument(skip(layout, params))]
    pub fn seed(layout: RegionLayout, params: ParameterSet, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        Self::seed_with(layout, params, &mut rng)
    }

    /// Seed with a caller-owned random source (test harnesses).
    pub fn seed_with(layout: RegionLayout, params: ParameterSet, rng: &mut Rng64) -> Self {
        let noise = NoiseField::new(NoiseConfig {
            seed: (rng.next_u64() & u64::from(u32::MAX)) as u32,
            octaves: params.get(keys::NOISE_DETAIL_OCTAVE).round().max(1.0) as u32,
            falloff: params.get(keys::NOISE_DETAIL_FALLOFF),
        });
        let seeds = generate_seeds(&layout, &params, rng);
        Self {
            layout,
            params,
            noise,
            seeds,
        }
    }

    pub fn layout(&self) -> &RegionLayout {
        &self.layout
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn seeds(&self) -> &SeedList {
        &self.seeds
    }

    /// Produce the drawable frame for `elapsed` seconds. Read-only; safe to
    /// call once per display refresh.
    pub fn frame(&self, elapsed: f64) -> Frame {
        compose_frame(&self.layout, &self.seeds, &self.noise, &self.params, elapsed)
    }

    /// Convenience: compose and rasterize in one call.
    pub fn render(&self, elapsed: f64) -> FlowResult<FrameRGBA> {
        rasterize(&self.frame(elapsed))
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
