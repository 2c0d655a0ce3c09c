//! The swarm: owns the particles, tracks the global best and drives the rounds

use log::{debug, info};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
	best_index, BestHistory, Bounds, CallbackAction, Mode, ParallelConfig, Particle, PsoConfig,
	PsoError, PsoIntermediate, PsoReport,
};

/// Lifecycle of a swarm. `Converged`, `ExhaustedIterations` and `Stopped` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwarmState {
	Initializing,
	Iterating,
	Converged,
	ExhaustedIterations,
	Stopped,
}

impl SwarmState {
	pub fn is_terminal(self) -> bool {
		matches!(
			self,
			SwarmState::Converged | SwarmState::ExhaustedIterations | SwarmState::Stopped
		)
	}
}

fn check_positive(value: usize, name: &'static str) -> Result<(), PsoError> {
	if value == 0 {
		return Err(PsoError::NonPositive { name });
	}
	Ok(())
}

/// Particle swarm over an objective `func` borrowed for the swarm's lifetime
pub struct Swarm<'a, F, R = StdRng>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
	R: Rng,
{
	func: &'a F,
	particles: Vec<Particle>,
	global_best: Array1<f64>,
	global_best_fitness: f64,
	mode: Mode,
	max_iterations: usize,
	recent_best: BestHistory,
	trace: Vec<f64>,
	state: SwarmState,
	nit: usize,
	nfev: usize,
	parallel: ParallelConfig,
	callback: Option<Box<dyn FnMut(&PsoIntermediate) -> CallbackAction>>,
	rng: R,
}

impl<'a, F> Swarm<'a, F, StdRng>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
{
	/// Build a swarm whose random stream comes from `config.seed`, or from the
	/// thread RNG when no seed is given.
	pub fn new(func: &'a F, config: PsoConfig) -> Result<Self, PsoError> {
		let rng = match config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		Self::with_rng(func, config, rng)
	}
}

impl<'a, F, R> Swarm<'a, F, R>
where
	F: Fn(&Array1<f64>) -> f64 + Sync,
	R: Rng,
{
	/// Build a swarm drawing every random number from `rng`. `config.seed` is ignored.
	pub fn with_rng(func: &'a F, config: PsoConfig, mut rng: R) -> Result<Self, PsoError> {
		let PsoConfig {
			population_size,
			dimension,
			max_iterations,
			bounds,
			coefficients,
			mode,
			history_window,
			parallel,
			callback,
			..
		} = config;

		check_positive(population_size, "population size")?;
		check_positive(dimension, "dimension")?;
		check_positive(max_iterations, "max iterations")?;
		check_positive(history_window, "history window")?;
		let bounds = Bounds::try_from(bounds)?;
		coefficients.validate()?;

		if parallel.enabled {
			if let Some(n) = parallel.num_threads {
				// an already-built global pool is kept
				if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
					debug!("PSO keeps the existing rayon pool, {} threads ignored: {}", n, e);
				}
			}
		}

		let particles = (0..population_size)
			.map(|_| Particle::new(coefficients, dimension, bounds, func, &mut rng))
			.collect::<Result<Vec<_>, _>>()?;

		let mut swarm = Self {
			func,
			global_best: particles[0].personal_best().clone(),
			global_best_fitness: particles[0].personal_best_fitness(),
			particles,
			mode,
			max_iterations,
			recent_best: BestHistory::new(history_window),
			trace: Vec::with_capacity(max_iterations + 1),
			state: SwarmState::Initializing,
			nit: 0,
			nfev: population_size,
			parallel,
			callback,
			rng,
		};
		swarm.update_global_best();
		swarm.trace.push(swarm.global_best_fitness);
		swarm.state = SwarmState::Iterating;

		info!(
			"PSO init: {} particles, {} dims, bounds=[{}, {}], mode={}, maxiter={}, window={}",
			population_size,
			dimension,
			bounds.lower(),
			bounds.upper(),
			mode,
			max_iterations,
			history_window
		);
		info!(
			"  w={:.3}, c1={:.3}, c2={:.3}, initial best={:.6e}",
			coefficients.inertia,
			coefficients.cognitive,
			coefficients.social,
			swarm.global_best_fitness
		);

		Ok(swarm)
	}

	/// Point the global best at the best personal best under `mode`.
	/// Full scan, the first particle wins ties.
	pub fn update_global_best(&mut self) {
		let fitnesses = self.particles.iter().map(|p| p.personal_best_fitness());
		if let Some((i, fitness)) = best_index(self.mode, fitnesses) {
			self.global_best.assign(self.particles[i].personal_best());
			self.global_best_fitness = fitness;
		}
	}

	/// True once the history window is full and every entry in it is identical
	pub fn has_converged(&self) -> bool {
		self.recent_best.is_full() && self.recent_best.is_constant()
	}

	/// Run rounds until convergence, the iteration cap or a callback stop.
	/// A swarm already in a terminal state just reports.
	pub fn optimize(&mut self) -> Result<PsoReport, PsoError> {
		while !self.state.is_terminal() {
			self.step()?;
		}
		info!("PSO finished after {} iterations: {}", self.nit, self.message());
		Ok(self.report())
	}

	/// One round: velocities, positions, personal bests, global best, history,
	/// convergence check, callback.
	pub fn step(&mut self) -> Result<SwarmState, PsoError> {
		if self.state.is_terminal() {
			return Ok(self.state);
		}
		self.nit += 1;

		for p in self.particles.iter_mut() {
			p.update_velocity(&self.global_best, &mut self.rng)?;
		}
		for p in self.particles.iter_mut() {
			p.update_position(&mut self.rng);
		}
		let improved = self.update_personal_bests();
		self.nfev += self.particles.len();

		// every particle is done before the global best moves
		self.update_global_best();
		self.recent_best.push(self.global_best.clone());
		self.trace.push(self.global_best_fitness);

		debug!(
			"PSO iter {:4}  best_f={:.6e}  improved={}/{}",
			self.nit,
			self.global_best_fitness,
			improved,
			self.particles.len()
		);

		if self.has_converged() {
			self.state = SwarmState::Converged;
		}

		if let Some(cb) = self.callback.as_mut() {
			let intermediate = PsoIntermediate {
				x: self.global_best.clone(),
				fun: self.global_best_fitness,
				iter: self.nit,
			};
			if let CallbackAction::Stop = cb(&intermediate) {
				if !self.state.is_terminal() {
					self.state = SwarmState::Stopped;
				}
			}
		}

		if self.state == SwarmState::Iterating && self.nit >= self.max_iterations {
			self.state = SwarmState::ExhaustedIterations;
		}
		Ok(self.state)
	}

	fn update_personal_bests(&mut self) -> usize {
		let mode = self.mode;
		let func = self.func;
		if self.parallel.enabled {
			self.particles.par_iter_mut().map(|p| p.update_pbest(mode, func) as usize).sum()
		} else {
			self.particles.iter_mut().map(|p| p.update_pbest(mode, func) as usize).sum()
		}
	}

	fn message(&self) -> String {
		match self.state {
			SwarmState::Converged => format!(
				"Converged: global best unchanged for {} iterations",
				self.recent_best.window()
			),
			SwarmState::ExhaustedIterations => {
				format!("Maximum iterations reached: {}", self.max_iterations)
			}
			SwarmState::Stopped => "Optimization stopped by callback".to_string(),
			SwarmState::Iterating | SwarmState::Initializing => {
				format!("In progress after {} iterations", self.nit)
			}
		}
	}

	/// Snapshot of the current best and run statistics
	pub fn report(&self) -> PsoReport {
		PsoReport {
			x: self.global_best.clone(),
			fun: self.global_best_fitness,
			success: matches!(self.state, SwarmState::Converged | SwarmState::Stopped),
			message: self.message(),
			nit: self.nit,
			nfev: self.nfev,
			state: self.state,
			trace: self.trace.clone(),
		}
	}

	pub fn global_best(&self) -> &Array1<f64> {
		&self.global_best
	}

	pub fn global_best_fitness(&self) -> f64 {
		self.global_best_fitness
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn state(&self) -> SwarmState {
		self.state
	}

	pub fn iterations(&self) -> usize {
		self.nit
	}

	pub fn max_iterations(&self) -> usize {
		self.max_iterations
	}

	pub fn evaluations(&self) -> usize {
		self.nfev
	}

	pub fn recent_best(&self) -> &BestHistory {
		&self.recent_best
	}

	pub fn trace(&self) -> &[f64] {
		&self.trace
	}
}
