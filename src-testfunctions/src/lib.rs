//! Optimization test functions library
//!
//! Benchmark objectives used to validate the particle swarm and to drive the
//! `run_pso` binary. Functions are organized by category:
//!
//! - **Unimodal**: Single global optimum functions (sphere, rosenbrock, ...)
//! - **Multimodal**: Multiple local minima functions (ackley, rastrigin, ...)
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use swarm_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let f = get_function("rastrigin").unwrap();
//! assert!(f(&x).abs() < 1e-12);
//! let (lower, upper) = get_function_bounds("rastrigin").unwrap();
//! assert!(lower < upper);
//! ```

use ndarray::Array1;
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Signature shared by every test function
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Search range shared by every dimension (min, max)
    pub bounds: (f64, f64),
    /// Global minimum location for the smallest listed dimension, and its value
    pub global_minimum: (Vec<f64>, f64),
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

impl FunctionMetadata {
    /// Functions listed with a single dimension only take that one,
    /// the others take any dimension
    pub fn accepts_dimension(&self, dimension: usize) -> bool {
        match self.dimensions.as_slice() {
            [fixed] => *fixed == dimension,
            _ => dimension > 0,
        }
    }
}

fn entry(
    name: &str,
    bounds: (f64, f64),
    global_minimum: (Vec<f64>, f64),
    description: &str,
    multimodal: bool,
    dimensions: Vec<usize>,
) -> (String, FunctionMetadata) {
    (
        name.to_string(),
        FunctionMetadata {
            name: name.to_string(),
            bounds,
            global_minimum,
            description: description.to_string(),
            multimodal,
            dimensions,
        },
    )
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    HashMap::from([
        entry(
            "sphere",
            (-5.12, 5.12),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional convex bowl",
            false,
            vec![2, 5, 10],
        ),
        entry(
            "sum_squares",
            (-10.0, 10.0),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional weighted bowl",
            false,
            vec![2, 5, 10],
        ),
        entry(
            "rosenbrock",
            (-5.0, 10.0),
            (vec![1.0, 1.0], 0.0),
            "N-dimensional curved valley",
            false,
            vec![2, 3, 4],
        ),
        entry(
            "booth",
            (-10.0, 10.0),
            (vec![1.0, 3.0], 0.0),
            "2D unimodal plate",
            false,
            vec![2],
        ),
        entry(
            "matyas",
            (-10.0, 10.0),
            (vec![0.0, 0.0], 0.0),
            "2D unimodal plate",
            false,
            vec![2],
        ),
        entry(
            "step",
            (-100.0, 100.0),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional discontinuous plateaus",
            true,
            vec![2, 5],
        ),
        entry(
            "griewank",
            (-600.0, 600.0),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional multimodal function",
            true,
            vec![2, 5, 10],
        ),
        entry(
            "schwefel",
            (-500.0, 500.0),
            (vec![420.9687, 420.9687], 0.0),
            "N-dimensional deceptive multimodal function",
            true,
            vec![2, 5],
        ),
        entry(
            "rastrigin",
            (-5.12, 5.12),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional highly multimodal function",
            true,
            vec![2, 5, 10],
        ),
        entry(
            "ackley",
            (-32.768, 32.768),
            (vec![0.0, 0.0], 0.0),
            "N-dimensional multimodal function",
            true,
            vec![2, 5, 10],
        ),
    ])
}

/// Look a test function up by name
pub fn get_function(function_name: &str) -> Option<TestFunction> {
    let f: TestFunction = match function_name {
        "sphere" => sphere,
        "sum_squares" => sum_squares,
        "rosenbrock" => rosenbrock,
        "booth" => booth,
        "matyas" => matyas,
        "step" => step,
        "griewank" => griewank,
        "schwefel" => schwefel,
        "rastrigin" => rastrigin,
        "ackley" => ackley,
        _ => return None,
    };
    Some(f)
}

/// Names of every registered function, sorted
pub fn function_names() -> Vec<String> {
    let mut names: Vec<String> = get_function_metadata().into_keys().collect();
    names.sort();
    names
}

/// Search range for a function from metadata, None if unknown
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    get_function_metadata().get(function_name).map(|meta| meta.bounds)
}

/// Search range for a function, or `default_bounds` if unknown
pub fn get_function_bounds_or(function_name: &str, default_bounds: (f64, f64)) -> (f64, f64) {
    get_function_bounds(function_name).unwrap_or(default_bounds)
}
