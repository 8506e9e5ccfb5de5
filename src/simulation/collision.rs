//! Narrow phase: exact sphere-sphere test and response
//!
//! Three pieces, applied in order to every broad-phase candidate:
//! - [`spheres_collide`]    squared-distance overlap test (no sqrt)
//! - [`resolve_overlap`]    positional de-penetration, split equally
//! - [`collision_impulse`]  restitution impulse via effective mass

use crate::simulation::states::{Body, NVec3};

/// Exact overlap test: squared centre distance against squared radius sum.
pub fn spheres_collide(a: &Body, b: &Body) -> bool {
    let d2 = (a.x - b.x).norm_squared();
    let radius_sum = a.radius() + b.radius();
    d2 <= radius_sum * radius_sum
}

/// Separate two overlapping spheres so they exactly touch.
///
/// Each body moves half the overlap along the line of centres, regardless of
/// mass ratio (the impulse response right after *is* mass-weighted; the
/// mismatch is upstream-canonical). Exactly coincident centres get nudged
/// apart along x first so the direction is defined.
pub fn resolve_overlap(a: &mut Body, b: &mut Body) {
    let mut distance = (a.x - b.x).norm();

    if distance == 0.0 {
        a.x.x += 0.1;
        distance = (a.x - b.x).norm();
    }

    // Negative while penetrating
    let overlap = 0.5 * (distance - a.radius() - b.radius());

    let dir = (a.x - b.x) / distance;

    a.x -= overlap * dir;
    b.x += overlap * dir;
}

/// Impulse-based velocity response along the contact normal.
///
/// A single impulse magnitude computed through the pair's effective mass
/// satisfies both bodies' momentum constraints. The impulse is applied
/// without checking the sign of the closing speed, matching the canonical
/// upstream behavior; callers only reach this after a positive overlap test.
pub fn collision_impulse(a: &mut Body, b: &mut Body, restitution: f64) {
    let normal: NVec3 = (b.x - a.x).normalize();

    let meff = 1.0 / (1.0 / a.m() + 1.0 / b.m());

    let impact_speed = normal.dot(&(b.v - a.v));

    let jmag = (1.0 + restitution) * meff * impact_speed;

    a.v += jmag / a.m() * normal;
    b.v -= jmag / b.m() * normal;
}

/// Simultaneously borrow two distinct bodies out of the collection.
pub fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i != j);
    if i < j {
        let (left, right) = bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(i);
        let (a, b) = (&mut right[0], &mut left[j]);
        (a, b)
    }
}
