use std::time::Instant;

use crate::simulation::broad_phase::{select_sort_axis, sorted_order, sweep, update_endpoints};
use crate::simulation::collision::spheres_collide;
use crate::simulation::states::{Body, NVec3};

/// Helper to build a deterministic cloud of `n` unit spheres, no rand needed
fn make_bodies(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 25.0,
            (i_f * 0.13).cos() * 25.0,
            (i_f * 0.07).sin() * 25.0,
        );

        let body = Body::new(x, NVec3::zeros(), 1.0, 0.5).expect("benchmark body is valid");
        bodies.push(body);
    }

    update_endpoints(&mut bodies);
    bodies
}

/// Count overlapping pairs by brute-force all-pairs testing
fn brute_force_pairs(bodies: &[Body]) -> usize {
    let n = bodies.len();
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if spheres_collide(&bodies[i], &bodies[j]) {
                count += 1;
            }
        }
    }
    count
}

/// Count overlapping pairs via sort-and-sweep plus the narrow test
fn sweep_pairs(bodies: &[Body], axis: usize) -> usize {
    let order = sorted_order(bodies, axis);
    let candidates = sweep(bodies, &order, axis);

    candidates
        .iter()
        .filter(|&&(i, j)| spheres_collide(&bodies[i], &bodies[j]))
        .count()
}

/// Compare brute-force all-pairs testing against sort-and-sweep
pub fn bench_sweep() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let bodies = make_bodies(n);
        let axis = select_sort_axis(&bodies);

        // Warm up
        let expected = brute_force_pairs(&bodies);
        let found = sweep_pairs(&bodies, axis);
        assert_eq!(expected, found, "sweep missed pairs at n = {n}");

        // Time brute force
        let t0 = Instant::now();
        let _ = brute_force_pairs(&bodies);
        let dt_brute = t0.elapsed().as_secs_f64();

        // Time sort-and-sweep
        let t1 = Instant::now();
        let _ = sweep_pairs(&bodies, axis);
        let dt_sweep = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, axis = {axis}, pairs = {expected:6}, brute = {dt_brute:8.6} s, sweep = {dt_sweep:8.6} s"
        );
    }
}

/// Benchmark curve over a range of n
/// Paste output directly into excel to graph
pub fn bench_sweep_curve() {
    println!("N,brute_ms,sweep_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few runs to smooth noise
        let runs = if n <= 800 { 5 } else { 1 };

        let bodies = make_bodies(n);
        let axis = select_sort_axis(&bodies);

        let t0 = Instant::now();
        for _ in 0..runs {
            let _ = brute_force_pairs(&bodies);
        }
        let ms_brute = t0.elapsed().as_secs_f64() * 1000.0 / runs as f64;

        let t1 = Instant::now();
        for _ in 0..runs {
            let _ = sweep_pairs(&bodies, axis);
        }
        let ms_sweep = t1.elapsed().as_secs_f64() * 1000.0 / runs as f64;

        println!("{},{:.6},{:.6}", n, ms_brute, ms_sweep);
    }
}
