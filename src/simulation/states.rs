//! Core state types for the sphere simulation.
//!
//! Defines the body/system structs:
//! - `Body`      one rigid sphere (position, velocity, mass, accumulators)
//! - `Container` the fixed axis-aligned cubic boundary
//! - `System`    the full simulation state advanced once per frame
//!
//! Bodies live in a plain `Vec` and are referred to by index everywhere
//! (broad-phase pairs, spring endpoints). Indices stay valid across spawns;
//! `&mut Body` borrows never outlive a single operation.

use anyhow::{ensure, Result};
use nalgebra::Vector3;

use crate::simulation::inertia::RigidExtension;

pub type NVec3 = Vector3<f64>;

/// One rigid sphere.
///
/// `m` and `scale` are private so every mutation goes through the setters,
/// which keep the optional inertia tensor consistent with the current mass
/// and scale. The sphere radius is the x component of the (uniform) scale.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    m: f64,       // mass, > 0
    scale: NVec3, // uniform scale; scale.x is the sphere radius

    /// Per-step force accumulator. Cleared by the force pass, read once by
    /// the integrator. Impulses bypass this and hit velocity directly.
    pub force: NVec3,

    /// Projected extents along each axis, refreshed before every sort.
    pub min_ep: [f64; 3],
    pub max_ep: [f64; 3],

    /// Passthrough for the viewer; never interpreted by the core.
    pub color: [f32; 3],

    /// Rotational extension (orientation + box inertia tensor), if attached.
    pub rigid: Option<RigidExtension>,
}

impl Body {
    /// Create a sphere of radius `radius`. Fails on non-positive mass or
    /// radius; a bad mass is a configuration error, not a runtime one.
    pub fn new(x: NVec3, v: NVec3, m: f64, radius: f64) -> Result<Self> {
        ensure!(m > 0.0, "body mass must be > 0, got {m}");
        ensure!(radius > 0.0, "body radius must be > 0, got {radius}");
        Ok(Self {
            x,
            v,
            m,
            scale: NVec3::new(radius, radius, radius),
            force: NVec3::zeros(),
            min_ep: [0.0; 3],
            max_ep: [0.0; 3],
            color: [1.0, 1.0, 1.0],
            rigid: None,
        })
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn scale(&self) -> NVec3 {
        self.scale
    }

    pub fn radius(&self) -> f64 {
        self.scale.x
    }

    /// Attach a rotational extension with an identity orientation and a box
    /// inertia tensor derived from the current mass and scale.
    pub fn make_rigid(&mut self) {
        self.rigid = Some(RigidExtension::new(self.m, &self.scale));
    }

    /// Change mass, re-deriving the inertia tensor if one is attached.
    pub fn set_mass(&mut self, m: f64) -> Result<()> {
        ensure!(m > 0.0, "body mass must be > 0, got {m}");
        self.m = m;
        if let Some(r) = self.rigid.as_mut() {
            r.refresh(self.m, &self.scale);
        }
        Ok(())
    }

    /// Change scale, re-deriving the inertia tensor if one is attached.
    pub fn set_scale(&mut self, scale: NVec3) {
        self.scale = scale;
        if let Some(r) = self.rigid.as_mut() {
            r.refresh(self.m, &self.scale);
        }
    }

    pub fn clear_forces(&mut self) {
        self.force = NVec3::zeros();
    }

    pub fn apply_force(&mut self, f: NVec3) {
        self.force += f;
    }

    /// Apply an instantaneous impulse: velocity changes immediately, the
    /// integrator never sees it.
    pub fn apply_impulse(&mut self, j: NVec3) {
        self.v += j / self.m;
    }
}

/// Fixed axis-aligned cubic container.
#[derive(Debug, Clone)]
pub struct Container {
    pub centre: NVec3,
    pub half_extent: f64,
}

/// Complete simulation state, advanced by [`crate::simulation::engine::step`].
///
/// `sort_axis` is the broad-phase sweep axis (0 = x, 1 = y, 2 = z), written
/// once per step by the variance heuristic and read by the next step's sort.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // time
    pub container: Container,
    pub restitution: f64,
    pub sort_axis: usize,
}
