use super::error::{ConfigurationError, Result};
use super::types::Point;
use serde::{Deserialize, Serialize};

/// Lower bound of the benchmark domain on every axis.
pub const DEFAULT_LO: f64 = -5.12;
/// Upper bound of the benchmark domain on every axis.
pub const DEFAULT_HI: f64 = 5.12;

/// Closed hyper-rectangle `[lo, hi]^d` shared by every axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            lo: DEFAULT_LO,
            hi: DEFAULT_HI,
        }
    }
}

impl Bounds {
    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        let bounds = Self { lo, hi };
        bounds.validate()?;
        Ok(bounds)
    }

    /// `[-half_width, half_width]` on every axis
    pub fn symmetric(half_width: f64) -> Result<Self> {
        Self::new(-half_width, half_width)
    }

    pub fn validate(&self) -> Result<()> {
        // Negated so NaN bounds are rejected too
        if !(self.lo.is_finite() && self.hi.is_finite() && self.lo < self.hi) {
            return Err(ConfigurationError::InvalidBounds {
                lo: self.lo,
                hi: self.hi,
            }
            .into());
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Componentwise projection of `point` into the domain.
    ///
    /// Idempotent: clamping an already clamped point returns it unchanged.
    pub fn clamp(&self, point: &[f64]) -> Point {
        point.iter().map(|&x| x.clamp(self.lo, self.hi)).collect()
    }

    #[inline]
    pub fn clamp_in_place(&self, point: &mut [f64]) {
        for x in point.iter_mut() {
            *x = x.clamp(self.lo, self.hi);
        }
    }

    /// Clamps a caller-supplied start, rejecting empty or non-finite points.
    pub fn clamp_start(&self, start: &[f64]) -> Result<Point> {
        if start.is_empty() {
            return Err(ConfigurationError::EmptyStart.into());
        }
        if let Some((axis, &value)) = start.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(ConfigurationError::NonFiniteStart { axis, value }.into());
        }
        Ok(self.clamp(start))
    }

    pub fn contains(&self, point: &[f64]) -> bool {
        point.iter().all(|&x| x >= self.lo && x <= self.hi)
    }
}

// Tests at the bottom:
