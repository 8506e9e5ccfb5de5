//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - restitution coefficient and container half extent,
//! - deterministic seed for the spawn RNG

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub restitution: f64, // coefficient of restitution
    pub half_extent: f64, // container half extent
    pub seed: u64, // deterministic seed
}
