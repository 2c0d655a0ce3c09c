#[cfg(test)]
mod tests {
    use ndarray::Array1;
    use crate::{
        run_recorded_particle_swarm, CallbackAction, Mode, OptimizationRecorder,
        PsoConfigBuilder, PsoIntermediate, SwarmState,
    };

    fn quadratic(x: &Array1<f64>) -> f64 {
        x.iter().map(|&xi| xi * xi).sum()
    }

    #[test]
    fn test_optimization_recorder() {
        let recorder = OptimizationRecorder::new("test_function".to_string(), Mode::Minimize);
        let mut callback = recorder.create_callback();

        let steps = [(vec![1.0, 2.0], 5.0), (vec![0.5, 1.0], 1.25), (vec![0.5, 1.0], 1.25)];
        for (iter, (x, fun)) in steps.iter().enumerate() {
            let intermediate = PsoIntermediate {
                x: Array1::from(x.clone()),
                fun: *fun,
                iter,
            };
            assert!(matches!(callback(&intermediate), CallbackAction::Continue));
        }

        let records = recorder.get_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].x, vec![1.0, 2.0]);
        assert_eq!(records[0].best_result, 5.0);
        assert!(records[0].is_improvement);
        assert!(records[1].is_improvement);
        // same value again is not an improvement
        assert!(!records[2].is_improvement);

        assert_eq!(recorder.get_best_solution(), Some((vec![0.5, 1.0], 1.25)));
        recorder.clear();
        assert_eq!(recorder.num_iterations(), 0);
        assert_eq!(recorder.get_best_solution(), None);
    }

    #[test]
    fn test_recorder_respects_maximize() {
        let recorder = OptimizationRecorder::new("max".to_string(), Mode::Maximize);
        let mut callback = recorder.create_callback();
        for (iter, fun) in [1.0, 0.5, 2.0].into_iter().enumerate() {
            callback(&PsoIntermediate {
                x: Array1::from(vec![fun]),
                fun,
                iter,
            });
        }
        let flags: Vec<bool> = recorder.get_records().iter().map(|r| r.is_improvement).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn test_recorded_optimization() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = PsoConfigBuilder::new()
            .seed(42)
            .dimension(2)
            .bounds(-5.0, 5.0)
            .max_iterations(50)
            .population_size(10)
            .build();

        let result = run_recorded_particle_swarm("quadratic", quadratic, config, dir.path());
        assert!(result.is_ok());
        let (report, csv_path) = result.unwrap();
        assert!(std::path::Path::new(&csv_path).exists());

        let csv_content = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
        let lines: Vec<&str> = csv_content.trim().split('\n').collect();
        assert_eq!(lines[0], "iteration,x0,x1,best_result,is_improvement");
        assert_eq!(lines.len() - 1, report.nit);
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn test_recorded_run_reports_exhaustion() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = PsoConfigBuilder::new().seed(1).max_iterations(5).build();
        let (report, _) =
            run_recorded_particle_swarm("short", quadratic, config, dir.path()).unwrap();
        assert_eq!(report.state, SwarmState::ExhaustedIterations);
        assert!(report.message.starts_with("Maximum iterations reached"));
    }
}
