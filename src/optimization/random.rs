use crate::core::{Bounds, Point};
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Explicit, caller-owned source of randomness.
///
/// Every stochastic operation takes `&mut RandomStream` and draws from it in
/// call order, so one seed reproduces a whole experiment. Not `Clone`.
#[derive(Debug)]
pub struct RandomStream {
    rng: StdRng,
}

impl RandomStream {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 1)`
    #[inline]
    pub fn unit(&mut self) -> f64 {
        Standard.sample(&mut self.rng)
    }

    /// Uniform draw in `[lo, hi)`. A zero-width range returns `lo`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// `dim` independent uniform draws in `[lo, hi)`
    pub fn uniform_vector(&mut self, lo: f64, hi: f64, dim: usize) -> Point {
        (0..dim).map(|_| self.uniform(lo, hi)).collect()
    }

    /// Uniform point inside `bounds`, clamped against rounding at the upper edge
    pub fn uniform_point(&mut self, bounds: &Bounds, dim: usize) -> Point {
        let mut point = self.uniform_vector(bounds.lo, bounds.hi, dim);
        bounds.clamp_in_place(&mut point);
        point
    }
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
