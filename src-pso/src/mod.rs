//! Particle Swarm Optimization (PSO) global optimizer in pure Rust using ndarray
//!
//! A swarm of particles explores a box-bounded search space. Every round each
//! particle is pulled toward its own best point and toward the best point any
//! particle has found, then the bests are refreshed.
//!
//! Supported features:
//! - Minimization or maximization of an arbitrary `Fn(&Array1<f64>) -> f64`
//! - Common range [lower, upper] for every dimension, out-of-range coordinates
//!   are redrawn uniformly inside the range
//! - Per-dimension random factors in the velocity update
//! - Reproducible runs from a seed or from any injected `rand::Rng`
//! - Convergence when the global best has not moved for a whole window of rounds
//! - Optional parallel fitness evaluation with rayon
//! - Per-iteration callback and CSV recording of progress

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

pub mod best_history;
pub mod bounds;
pub mod error;
pub mod optimization_recorder;
pub mod particle;
pub mod particle_swarm;
pub mod run_recorded;
pub mod swarm;

mod tests;

pub use best_history::BestHistory;
pub use bounds::Bounds;
pub use error::PsoError;
pub use optimization_recorder::{OptimizationRecord, OptimizationRecorder};
pub use particle::{Particle, INITIAL_VELOCITY_RANGE};
pub use particle_swarm::particle_swarm;
pub use run_recorded::run_recorded_particle_swarm;
pub use swarm::{Swarm, SwarmState};

/// Index of the best value under `mode`; the first one wins ties.
pub(crate) fn best_index<I>(mode: Mode, values: I) -> Option<(usize, f64)>
where
	I: IntoIterator<Item = f64>,
{
	let mut best: Option<(usize, f64)> = None;
	for (i, v) in values.into_iter().enumerate() {
		match best {
			Some((_, b)) if !mode.is_better(v, b) => {}
			_ => best = Some((i, v)),
		}
	}
	best
}

/// Direction of the optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
	#[default]
	Minimize,
	Maximize,
}

impl Mode {
	/// Strict ordering: lower wins when minimizing, higher when maximizing.
	/// NaN ranks below every number in both modes.
	pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
		if candidate.is_nan() {
			return false;
		}
		if incumbent.is_nan() {
			return true;
		}
		match self {
			Mode::Minimize => candidate < incumbent,
			Mode::Maximize => candidate > incumbent,
		}
	}
}

impl FromStr for Mode {
	type Err = PsoError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"min" | "minimize" => Ok(Mode::Minimize),
			"max" | "maximize" => Ok(Mode::Maximize),
			_ => Err(PsoError::InvalidMode(s.to_string())),
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Mode::Minimize => write!(f, "min"),
			Mode::Maximize => write!(f, "max"),
		}
	}
}

/// Velocity update weights, fixed for the lifetime of a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
	/// w - weight of the previous velocity
	pub inertia: f64,
	/// c1 - pull toward the particle's own best
	pub cognitive: f64,
	/// c2 - pull toward the swarm's best
	pub social: f64,
}

impl Default for Coefficients {
	fn default() -> Self {
		Self {
			inertia: 0.7,
			cognitive: 1.5,
			social: 1.5,
		}
	}
}

impl Coefficients {
	pub fn new(inertia: f64, cognitive: f64, social: f64) -> Self {
		Self {
			inertia,
			cognitive,
			social,
		}
	}

	pub(crate) fn validate(&self) -> Result<(), PsoError> {
		for (name, value) in
			[("inertia", self.inertia), ("cognitive", self.cognitive), ("social", self.social)]
		{
			if !value.is_finite() {
				return Err(PsoError::InvalidCoefficient { name, value });
			}
		}
		Ok(())
	}
}

/// Parallel fitness evaluation settings
#[derive(Debug, Clone, Default)]
pub struct ParallelConfig {
	/// Evaluate particles with rayon
	pub enabled: bool,
	/// Size of the global rayon pool; `None` keeps rayon's default
	pub num_threads: Option<usize>,
}

/// Configuration for the particle swarm
pub struct PsoConfig {
	pub population_size: usize,
	pub dimension: usize,
	pub max_iterations: usize,
	/// (lower, upper), shared by every dimension
	pub bounds: (f64, f64),
	pub coefficients: Coefficients,
	pub mode: Mode,
	pub seed: Option<u64>,
	/// Number of identical consecutive global bests that counts as converged
	pub history_window: usize,
	pub parallel: ParallelConfig,
	/// Optional per-iteration callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&PsoIntermediate) -> CallbackAction>>,
}

impl Default for PsoConfig {
	fn default() -> Self {
		Self {
			population_size: 30,
			dimension: 2,
			max_iterations: 500,
			bounds: (-10.0, 10.0),
			coefficients: Coefficients::default(),
			mode: Mode::Minimize,
			seed: None,
			history_window: 50,
			parallel: ParallelConfig::default(),
			callback: None,
		}
	}
}

/// Fluent builder for `PsoConfig`.
pub struct PsoConfigBuilder {
	cfg: PsoConfig,
}
impl Default for PsoConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}
impl PsoConfigBuilder {
	pub fn new() -> Self {
		Self {
			cfg: PsoConfig::default(),
		}
	}
	pub fn population_size(mut self, v: usize) -> Self {
		self.cfg.population_size = v;
		self
	}
	pub fn dimension(mut self, v: usize) -> Self {
		self.cfg.dimension = v;
		self
	}
	pub fn max_iterations(mut self, v: usize) -> Self {
		self.cfg.max_iterations = v;
		self
	}
	pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
		self.cfg.bounds = (lower, upper);
		self
	}
	pub fn coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
		self.cfg.coefficients = Coefficients::new(inertia, cognitive, social);
		self
	}
	pub fn inertia(mut self, v: f64) -> Self {
		self.cfg.coefficients.inertia = v;
		self
	}
	pub fn cognitive(mut self, v: f64) -> Self {
		self.cfg.coefficients.cognitive = v;
		self
	}
	pub fn social(mut self, v: f64) -> Self {
		self.cfg.coefficients.social = v;
		self
	}
	pub fn mode(mut self, v: Mode) -> Self {
		self.cfg.mode = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn history_window(mut self, v: usize) -> Self {
		self.cfg.history_window = v;
		self
	}
	pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
		self.cfg.parallel = parallel;
		self
	}
	pub fn enable_parallel(mut self, enable: bool) -> Self {
		self.cfg.parallel.enabled = enable;
		self
	}
	pub fn parallel_threads(mut self, num_threads: usize) -> Self {
		self.cfg.parallel.num_threads = Some(num_threads);
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&PsoIntermediate) -> CallbackAction>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> PsoConfig {
		self.cfg
	}
}

/// Result/Report of a PSO run
#[derive(Clone)]
pub struct PsoReport {
	/// Global best position
	pub x: Array1<f64>,
	/// Fitness at `x`
	pub fun: f64,
	/// True when the run ended by convergence or by the callback
	pub success: bool,
	pub message: String,
	/// Completed rounds
	pub nit: usize,
	/// Fitness evaluations, construction included
	pub nfev: usize,
	pub state: SwarmState,
	/// Global best fitness after construction and after every round
	pub trace: Vec<f64>,
}

impl fmt::Debug for PsoReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PsoReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("state", &self.state)
			.field("trace", &format!("len={}", self.trace.len()))
			.finish()
	}
}

/// Information passed to callback after each round
pub struct PsoIntermediate {
	pub x: Array1<f64>,
	pub fun: f64,
	pub iter: usize,
}

/// Action returned by callback
pub enum CallbackAction {
	Continue,
	Stop,
}
