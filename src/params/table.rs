use std::collections::BTreeMap;

use crate::foundation::error::{FlowError, FlowResult};

/// Canonical control names shared with the external control panel.
pub mod keys {
    pub const TIME_MULTIPLIER: &str = "timeMultiplier";
    pub const NOISE_SIZE: &str = "noiseSize";
    pub const NOISE_SCALE: &str = "noiseScale";
    pub const NOISE_DETAIL_OCTAVE: &str = "noiseDetailOctave";
    pub const NOISE_DETAIL_FALLOFF: &str = "noiseDetailFalloff";
    pub const PARTICLE_FREQUENCY: &str = "particleFrequency";
    pub const GRID_TRANSPARENCY: &str = "gridTransparency";
    pub const TRAIL_TRANSPARENCY: &str = "trailTransparency";
    pub const GRID_SIZE: &str = "gridSize";
    pub const PARTICLE_MAX_COUNT: &str = "particleMaxCount";
    pub const PARTICLE_FORCE_STRENGTH: &str = "particleForceStrength";
    pub const PARTICLE_MAX_SPEED: &str = "particleMaxSpeed";
    pub const PARTICLE_TRAIL_WEIGHT: &str = "particleTrailWeight";
    pub const LINES_PER_REGION: &str = "linesPerRegion";
    pub const LINE_MIN_LENGTH: &str = "lineMinLength";
    pub const LINE_MAX_LENGTH: &str = "lineMaxLength";
}

/// Declared range of one numeric control.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParamSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Force `value` into the declared band: non-finite values fall back to
    /// the default, everything else is clamped to `[min, max]` and snapped to
    /// the `step` grid (when `step > 0`).
    pub fn conform(&self, value: f64) -> f64 {
        let value = if value.is_finite() {
            value
        } else {
            self.default
        };
        let clamped = value.clamp(self.min, self.max);
        if self.step > 0.0 && self.step.is_finite() {
            let snapped = self.min + ((clamped - self.min) / self.step).round() * self.step;
            snapped.clamp(self.min, self.max)
        } else {
            clamped
        }
    }
}

/// One named control: its declared range plus the current slider value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Param {
    pub spec: ParamSpec,
    pub value: f64,
}

/// Immutable-per-frame mapping of named numeric controls.
///
/// The table is owned and mutated by the external control panel; the core
/// only reads it. Reads are defensive: a glitched slider value outside its
/// declared band (or non-finite) is conformed on every access, so a frame is
/// always producible.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    params: BTreeMap<String, Param>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::panel_defaults()
    }
}

impl ParameterSet {
    /// Empty table. Useful for tests that declare their own specs.
    pub fn empty() -> Self {
        Self {
            params: BTreeMap::new(),
        }
    }

    /// The control panel table of the artwork, including the particle-system
    /// knobs so presets round-trip even though that subsystem lives outside
    /// this core.
    pub fn panel_defaults() -> Self {
        let mut set = Self::empty();
        let table: [(&str, ParamSpec); 16] = [
            (keys::TIME_MULTIPLIER, ParamSpec::new(0.0, 0.01, 0.000_01, 0.000_05)),
            (keys::NOISE_SIZE, ParamSpec::new(0.0, 100.0, 1.0, 80.0)),
            (keys::NOISE_SCALE, ParamSpec::new(0.0, 0.1, 0.0001, 0.1)),
            (keys::NOISE_DETAIL_OCTAVE, ParamSpec::new(0.0, 10.0, 1.0, 3.0)),
            (keys::NOISE_DETAIL_FALLOFF, ParamSpec::new(0.0, 1.0, 0.05, 0.45)),
            (keys::PARTICLE_FREQUENCY, ParamSpec::new(0.0, 360.0, 4.0, 10.0)),
            (keys::GRID_TRANSPARENCY, ParamSpec::new(0.0, 255.0, 1.0, 24.0)),
            (keys::TRAIL_TRANSPARENCY, ParamSpec::new(0.0, 255.0, 1.0, 17.0)),
            (keys::GRID_SIZE, ParamSpec::new(10.0, 50.0, 1.0, 25.0)),
            (keys::PARTICLE_MAX_COUNT, ParamSpec::new(50.0, 1000.0, 10.0, 300.0)),
            (keys::PARTICLE_FORCE_STRENGTH, ParamSpec::new(0.01, 0.5, 0.01, 0.27)),
            (keys::PARTICLE_MAX_SPEED, ParamSpec::new(0.5, 5.0, 0.1, 3.4)),
            (keys::PARTICLE_TRAIL_WEIGHT, ParamSpec::new(1.0, 5.0, 0.5, 2.0)),
            (keys::LINES_PER_REGION, ParamSpec::new(1.0, 10.0, 1.0, 6.0)),
            (keys::LINE_MIN_LENGTH, ParamSpec::new(50.0, 200.0, 5.0, 20.0)),
            (keys::LINE_MAX_LENGTH, ParamSpec::new(100.0, 400.0, 5.0, 150.0)),
        ];
        for (name, spec) in table {
            set.declare(name, spec);
        }
        set
    }

    /// Add (or replace) a control, initialized to its default value.
    pub fn declare(&mut self, name: impl Into<String>, spec: ParamSpec) {
        self.params.insert(
            name.into(),
            Param {
                spec,
                value: spec.default,
            },
        );
    }

    /// Builder-style [`declare`](Self::declare).
    pub fn with(mut self, name: impl Into<String>, spec: ParamSpec) -> Self {
        self.declare(name, spec);
        self
    }

    /// Current value of `name`, conformed to its declared band.
    ///
    /// Unknown controls read as 0.0 rather than failing; a missing control
    /// must never take the frame loop down.
    pub fn get(&self, name: &str) -> f64 {
        match self.params.get(name) {
            Some(p) => p.spec.conform(p.value),
            None => {
                tracing::warn!(control = name, "read of undeclared control");
                0.0
            }
        }
    }

    /// Set the value of an already-declared control. The stored value is
    /// conformed immediately, keeping the `value in [min, max]` invariant.
    pub fn set(&mut self, name: &str, value: f64) -> FlowResult<()> {
        let param = self
            .params
            .get_mut(name)
            .ok_or_else(|| FlowError::parameter(format!("unknown control '{name}'")))?;
        param.value = param.spec.conform(value);
        Ok(())
    }

    pub fn spec(&self, name: &str) -> Option<&ParamSpec> {
        self.params.get(name).map(|p| &p.spec)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/table.rs"]
mod tests;
