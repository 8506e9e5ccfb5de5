//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which force terms the engine registers
//! - [`ParametersConfig`] – numerical parameters and container geometry
//! - [`BodyConfig`]       – explicitly placed bodies
//! - [`PopulationConfig`] – a seeded random population of class-based spheres
//! - [`SpringConfig`]     – damped springs joining two bodies by index
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   gravity: true
//!   drag: false
//!
//! parameters:
//!   t_end: 60.0             # total simulation time
//!   h0: 0.016               # fixed step size
//!   seed: 1                 # deterministic spawn seed
//!   restitution: 0.85       # coefficient of restitution
//!   half_extent: 30.0       # container half extent
//!   centre: [0.0, 0.0, 0.0] # container centre (optional, defaults to origin)
//!
//! population:
//!   count: 200
//!   classes:
//!     - { m: 1.0, radius: 1.0, color: [1, 0, 0] }
//!     - { m: 2.0, radius: 2.0, color: [0, 1, 0] }
//!     - { m: 3.0, radius: 3.0, color: [0, 0, 1] }
//!   pos_min: [-30.0, -30.0, -30.0]
//!   pos_max: [ 29.0,  29.0,  29.0]
//!   vel_min: [-20.0, -20.0, -20.0]
//!   vel_max: [ 19.0,  19.0,  19.0]
//!
//! bodies:
//!   - x: [5.0, 0.0, 0.0]
//!     v: [-20.0, 0.0, 0.0]
//!     m: 1.0
//!     radius: 1.0
//!
//! springs:
//!   - { a: 0, b: 1, rest_length: 4.0, ks: 30.0, kd: 0.5 }
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Which force terms the engine registers when building a scenario
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub gravity: bool, // uniform gravity, (0, -9.81, 0) per unit mass
    pub drag: bool,    // quadratic aerodynamic drag
}

/// Global numerical parameters and container geometry for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64,       // time end
    pub h0: f64,          // fixed step size
    pub seed: u64,        // deterministic seed for spawns
    pub restitution: f64, // coefficient of restitution
    pub half_extent: f64, // container half extent
    pub centre: Option<[f64; 3]>, // container centre, defaults to the origin
}

/// Configuration for a single explicitly placed body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 3],              // initial position
    pub v: [f64; 3],              // initial velocity
    pub m: f64,                   // mass, must be > 0
    pub radius: f64,              // sphere radius, must be > 0
    pub color: Option<[f32; 3]>,  // viewer color, defaults to white
    pub rigid: Option<bool>,      // attach the rotational extension
}

/// One class of sphere a random population draws from
#[derive(Deserialize, Debug, Clone)]
pub struct BodyClass {
    pub m: f64,
    pub radius: f64,
    pub color: [f32; 3],
}

/// A seeded random population: `count` spheres drawn uniformly from the
/// classes, placed and launched inside the given ranges. The same ranges
/// drive runtime spawns
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub count: usize,
    pub classes: Vec<BodyClass>,
    pub pos_min: [f64; 3],
    pub pos_max: [f64; 3],
    pub vel_min: [f64; 3],
    pub vel_max: [f64; 3],
}

/// A damped spring joining two bodies by index into the body list
#[derive(Deserialize, Debug, Clone)]
pub struct SpringConfig {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
    pub ks: f64,
    pub kd: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,             // force-term switches
    pub parameters: ParametersConfig,     // numerical parameters and container
    pub bodies: Option<Vec<BodyConfig>>,  // explicitly placed bodies
    pub population: Option<PopulationConfig>, // random population, if any
    pub springs: Option<Vec<SpringConfig>>,   // spring links, if any
}
