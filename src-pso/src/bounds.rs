use rand::Rng;

use crate::PsoError;

/// Common search range applied to every dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Build a range; `lower == upper` is accepted and pins every coordinate.
    /// The width `upper - lower` must itself be finite.
    pub fn new(lower: f64, upper: f64) -> Result<Self, PsoError> {
        if !lower.is_finite()
            || !upper.is_finite()
            || lower > upper
            || !(upper - lower).is_finite()
        {
            return Err(PsoError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Uniform draw on the closed interval
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.is_degenerate() {
            self.lower
        } else {
            rng.random_range(self.lower..=self.upper)
        }
    }
}

impl TryFrom<(f64, f64)> for Bounds {
    type Error = PsoError;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self, Self::Error> {
        Bounds::new(lower, upper)
    }
}
