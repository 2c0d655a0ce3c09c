use std::fs::create_dir_all;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::{CallbackAction, Mode, PsoError, PsoIntermediate};

/// Records optimization progress via swarm callbacks
#[derive(Debug)]
pub struct OptimizationRecorder {
    /// Function name (used for CSV filename)
    function_name: String,
    /// Direction used to decide what counts as an improvement
    mode: Mode,
    /// Shared records storage
    records: Arc<Mutex<Vec<OptimizationRecord>>>,
    /// Best function value seen so far
    best_value: Arc<Mutex<Option<f64>>>,
}

/// A single optimization iteration record
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRecord {
    /// Iteration number
    pub iteration: usize,
    /// Global best position after this iteration
    pub x: Vec<f64>,
    /// Global best fitness after this iteration
    pub best_result: f64,
    /// Whether this iteration improved the best known result
    pub is_improvement: bool,
}

impl OptimizationRecorder {
    pub fn new(function_name: String, mode: Mode) -> Self {
        Self {
            function_name,
            mode,
            records: Arc::new(Mutex::new(Vec::new())),
            best_value: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a callback function that records optimization progress
    pub fn create_callback(&self) -> Box<dyn FnMut(&PsoIntermediate) -> CallbackAction + Send> {
        let records = self.records.clone();
        let best_value = self.best_value.clone();
        let mode = self.mode;

        Box::new(move |intermediate: &PsoIntermediate| -> CallbackAction {
            let mut best_guard = best_value.lock().expect("recorder lock poisoned");
            let is_improvement = match *best_guard {
                Some(best) => mode.is_better(intermediate.fun, best),
                None => true,
            };
            if is_improvement {
                *best_guard = Some(intermediate.fun);
            }
            drop(best_guard);

            records.lock().expect("recorder lock poisoned").push(OptimizationRecord {
                iteration: intermediate.iter,
                x: intermediate.x.to_vec(),
                best_result: intermediate.fun,
                is_improvement,
            });

            CallbackAction::Continue
        })
    }

    /// Save all recorded iterations to `<output_dir>/<function_name>.csv`
    pub fn save_to_csv(&self, output_dir: impl AsRef<Path>) -> Result<String, PsoError> {
        let output_dir = output_dir.as_ref();
        create_dir_all(output_dir)?;

        let path = output_dir.join(format!("{}.csv", self.function_name));
        let mut writer = csv::Writer::from_path(&path)?;

        let records_guard = self.records.lock().expect("recorder lock poisoned");
        if let Some(first) = records_guard.first() {
            let mut header = vec!["iteration".to_string()];
            header.extend((0..first.x.len()).map(|i| format!("x{}", i)));
            header.push("best_result".to_string());
            header.push("is_improvement".to_string());
            writer.write_record(&header)?;

            for record in records_guard.iter() {
                let mut row = vec![record.iteration.to_string()];
                row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
                row.push(format!("{:.16}", record.best_result));
                row.push(record.is_improvement.to_string());
                writer.write_record(&row)?;
            }
        }
        writer.flush()?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// Get a copy of all recorded iterations
    pub fn get_records(&self) -> Vec<OptimizationRecord> {
        self.records.lock().expect("recorder lock poisoned").clone()
    }

    pub fn num_iterations(&self) -> usize {
        self.records.lock().expect("recorder lock poisoned").len()
    }

    pub fn clear(&self) {
        self.records.lock().expect("recorder lock poisoned").clear();
        *self.best_value.lock().expect("recorder lock poisoned") = None;
    }

    /// Final best solution if any iterations were recorded
    pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
        let records_guard = self.records.lock().expect("recorder lock poisoned");
        records_guard.last().map(|r| (r.x.clone(), r.best_result))
    }
}
