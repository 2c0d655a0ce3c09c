use crate::{PsoConfig, PsoError, PsoReport, Swarm};
use ndarray::Array1;

/// One-call entry point:
/// - `func`: objective function mapping x -> f(x)
/// - `config`: swarm configuration (size, bounds, mode, coefficients, seed, ...)
pub fn particle_swarm<F>(func: &F, config: PsoConfig) -> Result<PsoReport, PsoError>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let mut swarm = Swarm::new(func, config)?;
    swarm.optimize()
}
