use ndarray::Array1;
use swarm_pso::{Mode, PsoConfigBuilder, PsoError, Swarm, SwarmState};
use swarm_testfunctions::{rastrigin, sphere};

#[test]
fn test_positions_stay_inside_bounds() {
    // oversized coefficients push particles out of the box every round
    let config = PsoConfigBuilder::new()
        .seed(1)
        .population_size(20)
        .dimension(4)
        .bounds(-1.0, 1.0)
        .coefficients(1.2, 2.5, 2.5)
        .max_iterations(100)
        .build();
    let mut swarm = Swarm::new(&sphere, config).unwrap();
    while !swarm.state().is_terminal() {
        swarm.step().unwrap();
        for p in swarm.particles() {
            assert_eq!(p.position().len(), 4);
            assert_eq!(p.velocity().len(), 4);
            assert_eq!(p.personal_best().len(), 4);
            for &x in p.position() {
                assert!((-1.0..=1.0).contains(&x), "position {} escaped the bounds", x);
            }
        }
    }
}

#[test]
fn test_global_best_never_worsens_when_minimizing() {
    let config = PsoConfigBuilder::new()
        .seed(2)
        .dimension(5)
        .bounds(-5.12, 5.12)
        .max_iterations(300)
        .build();
    let report = Swarm::new(&rastrigin, config).unwrap().optimize().unwrap();
    for w in report.trace.windows(2) {
        assert!(w[1] <= w[0], "best fitness went from {} to {}", w[0], w[1]);
    }
}

#[test]
fn test_global_best_never_worsens_when_maximizing() {
    let config = PsoConfigBuilder::new()
        .seed(3)
        .dimension(3)
        .bounds(-5.12, 5.12)
        .mode(Mode::Maximize)
        .max_iterations(300)
        .build();
    let report = Swarm::new(&rastrigin, config).unwrap().optimize().unwrap();
    for w in report.trace.windows(2) {
        assert!(w[1] >= w[0], "best fitness went from {} to {}", w[0], w[1]);
    }
}

#[test]
fn test_personal_bests_never_worsen() {
    let config = PsoConfigBuilder::new().seed(4).dimension(3).max_iterations(150).build();
    let mut swarm = Swarm::new(&sphere, config).unwrap();
    let mut last: Vec<f64> = swarm.particles().iter().map(|p| p.personal_best_fitness()).collect();
    while !swarm.state().is_terminal() {
        swarm.step().unwrap();
        for (p, prev) in swarm.particles().iter().zip(last.iter_mut()) {
            assert!(p.personal_best_fitness() <= *prev);
            assert_eq!(p.personal_best_fitness(), sphere(p.personal_best()));
            *prev = p.personal_best_fitness();
        }
    }
}

#[test]
fn test_constant_landscape_stops_by_convergence() {
    let flat = |_x: &Array1<f64>| 42.0;
    let config = PsoConfigBuilder::new()
        .seed(5)
        .dimension(3)
        .max_iterations(10_000)
        .history_window(40)
        .build();
    let report = Swarm::new(&flat, config).unwrap().optimize().unwrap();
    assert_eq!(report.state, SwarmState::Converged);
    assert_eq!(report.nit, 40);
    assert_eq!(report.fun, 42.0);
}

#[test]
fn test_invalid_mode_is_rejected_before_any_swarm_exists() {
    let err = "invalid".parse::<Mode>().unwrap_err();
    assert!(matches!(err, PsoError::InvalidMode(ref s) if s == "invalid"));
    assert!(err.to_string().contains("'min' or 'max'"));
}

#[test]
fn test_degenerate_point_bounds_pin_the_particle() {
    let f = |x: &Array1<f64>| (x[0] - 2.0).powi(2);
    let config = PsoConfigBuilder::new()
        .seed(6)
        .population_size(1)
        .dimension(1)
        .bounds(0.0, 0.0)
        .max_iterations(100)
        .build();
    let mut swarm = Swarm::new(&f, config).unwrap();
    let at_zero = f(&Array1::zeros(1));
    assert_eq!(swarm.particles()[0].position()[0], 0.0);
    assert_eq!(swarm.particles()[0].personal_best_fitness(), at_zero);

    while !swarm.state().is_terminal() {
        swarm.step().unwrap();
        let p = &swarm.particles()[0];
        assert_eq!(p.position()[0], 0.0);
        assert_eq!(p.personal_best_fitness(), at_zero);
    }
    assert_eq!(swarm.global_best()[0], 0.0);
}
