use std::path::Path;

use ndarray::Array1;

use crate::{particle_swarm, OptimizationRecorder, PsoConfig, PsoError, PsoReport};

/// Run the swarm with a recorder attached and save its progress as CSV.
/// Any callback already in `config` is replaced.
pub fn run_recorded_particle_swarm<F>(
    function_name: &str,
    func: F,
    mut config: PsoConfig,
    output_dir: impl AsRef<Path>,
) -> Result<(PsoReport, String), PsoError>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let recorder = OptimizationRecorder::new(function_name.to_string(), config.mode);
    config.callback = Some(recorder.create_callback());

    let result = particle_swarm(&func, config)?;
    let csv_path = recorder.save_to_csv(output_dir)?;

    Ok((result, csv_path))
}
