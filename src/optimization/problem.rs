use crate::core::Point;
use argmin::core::{CostFunction, Error};
use std::f64::consts::PI;

/// Anything the optimizers can minimize: an argmin cost function over points.
pub trait Objective: CostFunction<Param = Point, Output = f64> {}

impl<T> Objective for T where T: CostFunction<Param = Point, Output = f64> {}

/// Rastrigin benchmark: `10n + sum(x_i^2 - 10 cos(2 pi x_i))`.
///
/// Global minimum 0 at the origin, with local minima on a roughly unit-spaced
/// grid. Defined for any dimension; callers enforce bounds.
#[inline]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rastrigin;

impl CostFunction for Rastrigin {
    type Param = Point;
    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        Ok(rastrigin(param))
    }
}

// Tests at the bottom:
