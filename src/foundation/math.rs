/// Deterministic SplitMix64 generator.
///
/// Every randomized decision in seeding flows through one of these, so a
/// fixed seed reproduces the artwork exactly. Test harnesses inject their own
/// seeded instance.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi)`. Returns `lo` when the band is empty.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        if !(hi > lo) {
            return lo;
        }
        lo + (hi - lo) * self.next_f64_01()
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty slice.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let v = self.next_f64_01();
        ((v * len as f64) as usize).min(len - 1)
    }
}

/// Smoothness constant for [`smooth_abs`].
pub const SMOOTH_ABS_EPSILON: f64 = 0.01;

/// Smooth absolute value of a noise sample centered at 0.5.
///
/// `sqrt(centered^2 + epsilon)` folds the sample into a strictly positive
/// displacement magnitude while keeping the derivative continuous at the
/// fold, unlike a hard `abs`.
pub fn smooth_abs(noise_val: f64) -> f64 {
    let centered = noise_val - 0.5;
    (centered * centered + SMOOTH_ABS_EPSILON).sqrt()
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
