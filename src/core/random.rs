/// Source of 32-bit draws consumed by the price walk.
///
/// The walk only depends on this trait, so tests can feed fixed draw
/// sequences without going through seed derivation.
pub trait RandomSource {
    /// Advances the source and returns the new state.
    fn next_u32(&mut self) -> u32;
}

pub const LCG_MULTIPLIER: u32 = 1_664_525;
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator over `u32` with wrapping arithmetic.
///
/// `state = (1664525 * state + 1013904223) mod 2^32`, advanced before every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    #[must_use]
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    /// Seeds from a 64-bit walk seed.
    ///
    /// Only the low 32 bits survive the first step modulo `2^32`, so truncation
    /// here yields the same sequence as stepping the full seed.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self::new(seed as u32)
    }

    #[must_use]
    pub const fn state(self) -> u32 {
        self.state
    }

    #[must_use]
    pub const fn step(state: u32) -> u32 {
        state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
    }
}

impl RandomSource for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        self.state
    }
}
