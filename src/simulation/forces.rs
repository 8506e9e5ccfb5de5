//! Force contributors for the sphere engine
//!
//! Each term implements [`Force`] and adds its contribution into the
//! per-body force accumulators. [`ForceSet::accumulate_forces`] zeroes the
//! accumulators first, so contributions within a step only ever add up.

use crate::simulation::states::{Body, NVec3};

/// Gravitational acceleration (m/s^2), downward along y.
pub const GRAVITY: f64 = 9.81;

/// Air density at sea level (kg/m^3).
pub const AIR_DENSITY: f64 = 1.225;

/// Drag coefficient of a sphere.
pub const DRAG_COEFF: f64 = 0.47;

/// Collection of force terms (gravity, drag, springs)
/// Each term implements [`Force`] and their contributions are summed
/// into each body's `force` accumulator
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Clear every body's accumulator, then let each term add its
    /// contribution at time `t`
    pub fn accumulate_forces(&self, t: f64, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            b.clear_forces();
        }
        for term in &self.terms {
            term.accumulate(t, bodies);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on the body collection
/// Implementations add their contribution into each body's accumulator
pub trait Force {
    fn accumulate(&self, t: f64, bodies: &mut [Body]);
}

/// Uniform gravity: F = m * g, with g = (0, -9.81, 0)
pub struct Gravity {
    pub g: NVec3,
}

impl Default for Gravity {
    fn default() -> Self {
        Self {
            g: NVec3::new(0.0, -GRAVITY, 0.0),
        }
    }
}

impl Force for Gravity {
    fn accumulate(&self, _t: f64, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            let f = self.g * b.m();
            b.apply_force(f);
        }
    }
}

/// Quadratic aerodynamic drag:
/// F = -0.5 * rho * |v|^2 * Cd * (pi r^2) * v_hat
///
/// A body at rest contributes nothing; normalizing a zero velocity would
/// produce NaNs.
pub struct AeroDrag {
    pub air_density: f64,
    pub drag_coeff: f64,
}

impl Default for AeroDrag {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY,
            drag_coeff: DRAG_COEFF,
        }
    }
}

impl Force for AeroDrag {
    fn accumulate(&self, _t: f64, bodies: &mut [Body]) {
        for b in bodies.iter_mut() {
            let speed = b.v.norm();
            if speed == 0.0 {
                continue;
            }

            let area = std::f64::consts::PI * b.radius() * b.radius();
            let f = -0.5 * self.air_density * speed * speed * self.drag_coeff * area
                * (b.v / speed);
            b.apply_force(f);
        }
    }
}

/// Damped Hookean spring joining two bodies by index.
///
/// Each endpoint gets its own unit vector toward the other body and its own
/// projected velocity, so the two forces are not forced to be exactly
/// equal-and-opposite:
///
/// f = -ks * (rest_length - distance) - kd * v_projected
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
    pub ks: f64, // spring constant
    pub kd: f64, // damping constant
}

impl Force for Spring {
    fn accumulate(&self, _t: f64, bodies: &mut [Body]) {
        if self.a == self.b || self.a >= bodies.len() || self.b >= bodies.len() {
            return;
        }

        let (xa, va) = (bodies[self.a].x, bodies[self.a].v);
        let (xb, vb) = (bodies[self.b].x, bodies[self.b].v);

        let distance = (xb - xa).norm();
        if distance == 0.0 {
            // direction undefined for coincident endpoints
            return;
        }

        // Unit vector from each endpoint toward the other
        let unit_a = (xb - xa) / distance;
        let unit_b = (xa - xb) / distance;

        // Project each endpoint's velocity onto its own direction
        let va_proj = unit_a.dot(&va);
        let vb_proj = unit_b.dot(&vb);

        let fsd_a = -self.ks * (self.rest_length - distance) - self.kd * va_proj;
        let fsd_b = -self.ks * (self.rest_length - distance) - self.kd * vb_proj;

        bodies[self.a].apply_force(fsd_a * unit_a);
        bodies[self.b].apply_force(fsd_b * unit_b);
    }
}
