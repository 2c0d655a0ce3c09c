use swarm_pso::{particle_swarm, PsoConfigBuilder};
use swarm_testfunctions::{get_function_bounds, sphere};

#[test]
fn test_pso_sphere_2d() {
    let (lower, upper) = get_function_bounds("sphere").unwrap();
    let config = PsoConfigBuilder::new()
        .seed(30)
        .dimension(2)
        .bounds(lower, upper)
        .population_size(30)
        .max_iterations(500)
        .build();
    let report = particle_swarm(&sphere, config).unwrap();
    assert!(report.fun < 1e-6, "f = {}", report.fun);
}

#[test]
fn test_pso_sphere_5d() {
    let config = PsoConfigBuilder::new()
        .seed(31)
        .dimension(5)
        .bounds(-5.12, 5.12)
        .population_size(40)
        .max_iterations(1000)
        .build();
    let report = particle_swarm(&sphere, config).unwrap();
    assert!(report.fun < 1e-3, "f = {}", report.fun);
}

#[test]
fn test_pso_sphere_5d_parallel() {
    let config = PsoConfigBuilder::new()
        .seed(31)
        .dimension(5)
        .bounds(-5.12, 5.12)
        .population_size(40)
        .max_iterations(1000)
        .enable_parallel(true)
        .parallel_threads(2)
        .build();
    let report = particle_swarm(&sphere, config).unwrap();
    assert!(report.fun < 1e-3, "f = {}", report.fun);
}
