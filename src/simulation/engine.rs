//! High-level runtime engine settings and the per-frame step pipeline
//!
//! `Engine` selects which force terms a scenario registers; [`step`] is the
//! canonical frame update:
//!
//! clear + accumulate forces -> integrate -> boundary resolve -> refresh
//! endpoints -> sort along the sweep axis -> sweep for candidates -> narrow
//! phase per candidate -> re-select the sweep axis -> advance time

use crate::simulation::boundary::resolve_container;
use crate::simulation::broad_phase::{select_sort_axis, sorted_order, sweep, update_endpoints};
use crate::simulation::collision::{collision_impulse, pair_mut, resolve_overlap, spheres_collide};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::states::System;

#[derive(Debug, Clone)]
pub struct Engine {
    pub gravity: bool, // register the gravity term
    pub drag: bool,    // register the aerodynamic drag term
}

/// Advance the system by one frame of `dt` seconds.
///
/// Deterministic and single-threaded: the post state is a function of the
/// prior state and `dt` alone. Candidate pairs are index pairs local to this
/// call; nothing borrows into the body list across the step boundary.
pub fn step(sys: &mut System, forces: &ForceSet, dt: f64) {
    forces.accumulate_forces(sys.t, &mut sys.bodies);

    symplectic_euler(&mut sys.bodies, dt);

    for b in sys.bodies.iter_mut() {
        resolve_container(b, &sys.container, sys.restitution);
    }

    // Broad phase on the boundary-resolved positions
    update_endpoints(&mut sys.bodies);
    let order = sorted_order(&sys.bodies, sys.sort_axis);
    let candidates = sweep(&sys.bodies, &order, sys.sort_axis);

    for (i, j) in candidates {
        let (a, b) = pair_mut(&mut sys.bodies, i, j);
        if spheres_collide(a, b) {
            resolve_overlap(a, b);
            collision_impulse(a, b, sys.restitution);
        }
    }

    // Next step sweeps along the axis of greatest spread
    sys.sort_axis = select_sort_axis(&sys.bodies);

    sys.t += dt;
}
