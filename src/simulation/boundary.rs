//! Container boundary resolution
//!
//! Keeps every sphere inside the fixed axis-aligned cube: positions are
//! clamped so the surface sits exactly on a violated face, then a single
//! restitution impulse reflects the velocity off that face.

use crate::simulation::states::{Body, Container, NVec3};

/// Clamp `b` into the container and apply a restitution impulse.
///
/// The three axes are checked independently; each violated axis clamps the
/// position and records its inward unit normal. If more than one face is
/// penetrated at once (a corner or edge contact) the last axis checked wins
/// and supplies the only normal used for the impulse.
pub fn resolve_container(b: &mut Body, container: &Container, restitution: f64) {
    let r = b.radius();
    let mut normal: Option<NVec3> = None;

    for i in 0..3 {
        let hi = container.centre[i] + container.half_extent;
        let lo = container.centre[i] - container.half_extent;

        if b.x[i] + r >= hi {
            b.x[i] = hi - r;
            let mut n = NVec3::zeros();
            n[i] = -1.0;
            normal = Some(n);
        } else if b.x[i] - r <= lo {
            b.x[i] = lo + r;
            let mut n = NVec3::zeros();
            n[i] = 1.0;
            normal = Some(n);
        }
    }

    if let Some(n) = normal {
        // j = -(1 + e) m (v . n) n
        let j = -(1.0 + restitution) * b.m() * b.v.dot(&n) * n;
        b.apply_impulse(j);
    }
}
