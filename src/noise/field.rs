use ::noise::{NoiseFn, Perlin};

/// Configuration of the layered noise field.
///
/// `octaves` and `falloff` follow the usual layered-noise semantics: each
/// successive octave doubles the sample frequency and scales amplitude by
/// `falloff`. The seed is part of the configuration so fixtures reproduce
/// exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NoiseConfig {
    pub seed: u32,
    pub octaves: u32,
    pub falloff: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 2,
            falloff: 0.5,
        }
    }
}

/// Deterministic pseudo-random scalar field over `(x, y, t)`.
///
/// Pure: no mutable state beyond the configuration. Two calls with identical
/// arguments and identical configuration return identical output.
#[derive(Clone, Debug)]
pub struct NoiseField {
    config: NoiseConfig,
    perlin: Perlin,
}

impl NoiseField {
    /// Build a field, conforming the configuration to sane bands
    /// (`octaves in [1, 10]`, `falloff in [0, 1]`).
    pub fn new(config: NoiseConfig) -> Self {
        let config = NoiseConfig {
            seed: config.seed,
            octaves: config.octaves.clamp(1, 10),
            falloff: if config.falloff.is_finite() {
                config.falloff.clamp(0.0, 1.0)
            } else {
                0.5
            },
        };
        Self {
            perlin: Perlin::new(config.seed),
            config,
        }
    }

    pub fn config(&self) -> NoiseConfig {
        self.config
    }

    /// Layered sample in `[0, 1)`.
    pub fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;
        let mut norm = 0.0;
        for _ in 0..self.config.octaves {
            total += amplitude
                * self
                    .perlin
                    .get([x * frequency, y * frequency, t * frequency]);
            norm += amplitude;
            amplitude *= self.config.falloff;
            frequency *= 2.0;
        }
        // norm >= 1 since the first octave always contributes.
        let v = total / norm;
        ((v + 1.0) * 0.5).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/field.rs"]
mod tests;
