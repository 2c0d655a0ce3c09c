use ndarray::Array1;
use swarm_pso::{particle_swarm, Mode, PsoConfigBuilder};

/// Peak of height 0 at (3, 3, ..., 3)
fn inverted_paraboloid(x: &Array1<f64>) -> f64 {
    -x.iter().map(|&xi| (xi - 3.0).powi(2)).sum::<f64>()
}

#[test]
fn test_pso_finds_paraboloid_peak() {
    for seed in 0..10 {
        let config = PsoConfigBuilder::new()
            .seed(seed)
            .dimension(2)
            .bounds(-10.0, 10.0)
            .population_size(30)
            .max_iterations(500)
            .coefficients(0.7, 1.5, 1.5)
            .mode(Mode::Maximize)
            .build();
        let report = particle_swarm(&inverted_paraboloid, config).unwrap();
        let distance = report.x.iter().map(|&xi| (xi - 3.0).powi(2)).sum::<f64>().sqrt();
        assert!(
            distance < 0.5,
            "seed {}: best {:?} is {} away from (3, 3)",
            seed,
            report.x,
            distance
        );
        assert!(report.fun <= 0.0);
        assert!(report.nit <= 500);
    }
}

#[test]
fn test_pso_paraboloid_parse_mode() {
    let config = PsoConfigBuilder::new()
        .seed(100)
        .dimension(3)
        .bounds(-10.0, 10.0)
        .mode("max".parse().unwrap())
        .build();
    let report = particle_swarm(&inverted_paraboloid, config).unwrap();
    assert!(report.fun > -1e-3, "f = {}", report.fun);
}
