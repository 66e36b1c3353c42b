//! Flowlines renders a generative flow-field artwork.
//!
//! A fixed layout of rectangular lanes is populated with a small number of
//! non-overlapping guide segments, which are then drawn not as straight lines
//! but as noise-perturbed ribbons that evoke hand-drawn flow strokes.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: `RegionLayout + ParameterSet + Rng64 -> SeedList` (guide segments
//!    placed by incremental half-plane partitioning, once per sketch instance)
//! 2. **Compose**: `SeedList + NoiseField + ParameterSet -> Frame` (drawable
//!    primitives, once per display refresh)
//! 3. **Rasterize** (optional): `Frame -> FrameRGBA` (CPU backend)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: seeding and noise sampling are pure and
//!   stable for a given seed and configuration.
//! - **No fatal errors in the frame loop**: every anomaly (exhausted placement
//!   attempts, degenerate geometry, out-of-band parameter values) degrades
//!   gracefully within a single frame or a single region.
//!
//! A [`Sketch`] instance is constructed once per parameter preset; switching
//! presets means discarding the instance and seeding a fresh one.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod layout;
mod noise;
mod params;
mod pipeline;
mod render;
mod seeding;

pub use animation::ease::Ease;
pub use foundation::core::{Canvas, Point, Rect, Rgba8};
pub use foundation::error::{FlowError, FlowResult};
pub use foundation::math::{Rng64, SMOOTH_ABS_EPSILON, smooth_abs};
pub use layout::regions::{Region, RegionLayout};
pub use noise::field::{NoiseConfig, NoiseField};
pub use params::table::{Param, ParamSpec, ParameterSet, keys};
pub use pipeline::Sketch;
pub use render::compositor::compose_frame;
pub use render::frame::{Frame, Primitive};
pub use render::raster::{FrameRGBA, rasterize};
pub use render::stroke::{STROKE_STEPS, StrokeRenderer};
pub use seeding::generator::{SeedList, Segment, generate_seeds};
pub use seeding::partition::{LineEquation, SamplePoint, SpacePartitioner};
