use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use swarm_pso::{
	particle_swarm, run_recorded_particle_swarm, Mode, PsoConfig, PsoConfigBuilder,
};
use swarm_testfunctions::{
	function_names, get_function, get_function_bounds_or, get_function_metadata,
};

/// Run the particle swarm on one of the registered test functions
#[derive(Parser, Debug)]
#[command(name = "run_pso")]
#[command(about = "Optimize a benchmark function with particle swarm optimization")]
struct Args {
	/// Test function name (see --list)
	#[arg(short, long, default_value = "sphere")]
	function: String,

	/// List the available test functions and exit
	#[arg(long)]
	list: bool,

	/// Number of variables
	#[arg(short, long, default_value_t = 2, value_parser = parse_positive_usize)]
	dimension: usize,

	/// Number of particles
	#[arg(short, long, default_value_t = 30, value_parser = parse_positive_usize)]
	population: usize,

	/// Maximum number of rounds
	#[arg(short = 'i', long, default_value_t = 500, value_parser = parse_positive_usize)]
	max_iterations: usize,

	/// Lower bound shared by every variable (defaults to the function's own range)
	#[arg(long, allow_hyphen_values = true)]
	lower: Option<f64>,

	/// Upper bound shared by every variable (defaults to the function's own range)
	#[arg(long, allow_hyphen_values = true)]
	upper: Option<f64>,

	/// Inertia weight w
	#[arg(short = 'w', long, default_value_t = 0.7)]
	inertia: f64,

	/// Cognitive weight c1
	#[arg(long, default_value_t = 1.5)]
	cognitive: f64,

	/// Social weight c2
	#[arg(long, default_value_t = 1.5)]
	social: f64,

	/// "min" or "max"
	#[arg(short, long, default_value = "min")]
	mode: Mode,

	/// Seed for reproducible runs
	#[arg(short, long)]
	seed: Option<u64>,

	/// Rounds without change of the global best that count as converged
	#[arg(long, default_value_t = 50, value_parser = parse_positive_usize)]
	window: usize,

	/// Evaluate particles in parallel
	#[arg(long)]
	parallel: bool,

	/// Directory where the per-iteration CSV record is written
	#[arg(short, long)]
	output_dir: Option<PathBuf>,
}

fn parse_positive_usize(s: &str) -> Result<usize, String> {
	let v: usize = s.parse().map_err(|_| format!("invalid integer: {s}"))?;
	if v > 0 {
		Ok(v)
	} else {
		Err("value must be strictly positive (> 0)".to_string())
	}
}

fn build_config(args: &Args) -> PsoConfig {
	let (default_lower, default_upper) = get_function_bounds_or(&args.function, (-10.0, 10.0));
	let mut builder = PsoConfigBuilder::new()
		.population_size(args.population)
		.dimension(args.dimension)
		.max_iterations(args.max_iterations)
		.bounds(args.lower.unwrap_or(default_lower), args.upper.unwrap_or(default_upper))
		.coefficients(args.inertia, args.cognitive, args.social)
		.mode(args.mode)
		.history_window(args.window)
		.enable_parallel(args.parallel);
	if let Some(seed) = args.seed {
		builder = builder.seed(seed);
	}
	builder.build()
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	let func = get_function(&args.function).ok_or_else(|| {
		format!("unknown function '{}', available: {}", args.function, function_names().join(", "))
	})?;
	if let Some(meta) = get_function_metadata().get(&args.function) {
		if !meta.accepts_dimension(args.dimension) {
			return Err(format!(
				"function '{}' does not support {} dimensions (supported: {:?})",
				args.function, args.dimension, meta.dimensions
			)
			.into());
		}
	}
	let config = build_config(args);

	let report = match &args.output_dir {
		Some(dir) => {
			let (report, csv_path) =
				run_recorded_particle_swarm(&args.function, func, config, dir)?;
			log::info!("Recorded progress to {}", csv_path);
			report
		}
		None => particle_swarm(&func, config)?,
	};

	println!("{}", report.message);
	println!(
		"best f = {:.10e} after {} iterations ({} evaluations)",
		report.fun, report.nit, report.nfev
	);
	let x: Vec<String> = report.x.iter().map(|xi| format!("{:.6}", xi)).collect();
	println!("best x = [{}]", x.join(", "));
	Ok(())
}

fn main() {
	env_logger::init();
	let args = Args::parse();

	if args.list {
		for name in function_names() {
			println!("{}", name);
		}
		process::exit(0);
	}

	if let Err(e) = run(&args) {
		log::error!("{}", e);
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}
