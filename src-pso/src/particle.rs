//! A single particle: current position, velocity and the best point it has visited

use log::trace;
use ndarray::Array1;
use rand::Rng;

use crate::{Bounds, Coefficients, Mode, PsoError};

/// Half-width of the symmetric range initial velocities are drawn from.
/// Independent of the search bounds.
pub const INITIAL_VELOCITY_RANGE: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Particle {
    position: Array1<f64>,
    velocity: Array1<f64>,
    personal_best: Array1<f64>,
    personal_best_fitness: f64,
    coefficients: Coefficients,
    bounds: Bounds,
}

impl Particle {
    /// Place a particle uniformly inside `bounds` with a small random velocity.
    /// The starting position is also the first personal best.
    pub fn new<F, R>(
        coefficients: Coefficients,
        dimension: usize,
        bounds: Bounds,
        func: &F,
        rng: &mut R,
    ) -> Result<Self, PsoError>
    where
        F: Fn(&Array1<f64>) -> f64 + ?Sized,
        R: Rng + ?Sized,
    {
        if dimension == 0 {
            return Err(PsoError::NonPositive { name: "dimension" });
        }
        let position = Array1::from_shape_fn(dimension, |_| bounds.sample(&mut *rng));
        let velocity = Array1::from_shape_fn(dimension, |_| {
            rng.random_range(-INITIAL_VELOCITY_RANGE..=INITIAL_VELOCITY_RANGE)
        });
        let personal_best_fitness = func(&position);
        Ok(Self {
            personal_best: position.clone(),
            position,
            velocity,
            personal_best_fitness,
            coefficients,
            bounds,
        })
    }

    /// v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)
    ///
    /// `r1` and `r2` are drawn afresh for every dimension.
    pub fn update_velocity<R: Rng + ?Sized>(
        &mut self,
        global_best: &Array1<f64>,
        rng: &mut R,
    ) -> Result<(), PsoError> {
        if global_best.len() != self.dimension() {
            return Err(PsoError::DimensionMismatch {
                expected: self.dimension(),
                actual: global_best.len(),
            });
        }
        let Coefficients { inertia, cognitive, social } = self.coefficients;
        for i in 0..self.velocity.len() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            self.velocity[i] = inertia * self.velocity[i]
                + cognitive * r1 * (self.personal_best[i] - self.position[i])
                + social * r2 * (global_best[i] - self.position[i]);
        }
        Ok(())
    }

    /// x += v, then any coordinate that left the bounds is redrawn uniformly
    /// inside them. Velocity is kept as is.
    ///
    /// Call after `update_velocity`.
    pub fn update_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position += &self.velocity;
        let bounds = self.bounds;
        for x in self.position.iter_mut() {
            if !bounds.contains(*x) {
                *x = bounds.sample(rng);
            }
        }
    }

    /// Evaluate the current position and keep it if strictly better than the
    /// personal best. Returns whether the personal best moved.
    pub fn update_pbest<F>(&mut self, mode: Mode, func: &F) -> bool
    where
        F: Fn(&Array1<f64>) -> f64 + ?Sized,
    {
        let fitness = func(&self.position);
        if mode.is_better(fitness, self.personal_best_fitness) {
            trace!("pbest {:.6e} -> {:.6e}", self.personal_best_fitness, fitness);
            self.personal_best.assign(&self.position);
            self.personal_best_fitness = fitness;
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }

    pub fn personal_best(&self) -> &Array1<f64> {
        &self.personal_best
    }

    pub fn personal_best_fitness(&self) -> f64 {
        self.personal_best_fitness
    }

    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}
