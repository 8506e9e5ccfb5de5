//! Fixed-step time integration for the sphere system
//!
//! Semi-implicit (symplectic) Euler: velocity is updated from the
//! accumulated force first, then position from the *updated* velocity.
//! That ordering is what gives the scheme its good long-term energy
//! behavior compared to naive forward Euler.

use crate::simulation::states::Body;

/// Advance every body by one step of semi-implicit Euler.
///
/// Consumes only the continuous force accumulator; collision impulses are
/// applied to velocity directly at resolution time and never pass through
/// here.
pub fn symplectic_euler(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        let accel = b.force / b.m();

        // Kick then drift: v_n+1 = v_n + a dt, x_n+1 = x_n + v_n+1 dt
        b.v += accel * dt;
        b.x += b.v * dt;
    }
}
