//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//! - the seeded RNG and population ranges used for runtime spawns
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! step and visualization systems.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, PopulationConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AeroDrag, ForceSet, Gravity, Spring};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, Container, NVec3, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active force terms, plus everything runtime spawning needs
/// (the seeded RNG and the population ranges).
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub population: Option<PopulationConfig>,
    rng: StdRng,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: p_cfg.t_end,
            h0: p_cfg.h0,
            restitution: p_cfg.restitution,
            half_extent: p_cfg.half_extent,
            seed: p_cfg.seed,
        };
        ensure!(parameters.h0 > 0.0, "step size h0 must be > 0");
        ensure!(parameters.half_extent > 0.0, "container half_extent must be > 0");

        let centre = p_cfg.centre.unwrap_or([0.0; 3]);
        let container = Container {
            centre: NVec3::from(centre),
            half_extent: parameters.half_extent,
        };

        let engine = Engine {
            gravity: cfg.engine.gravity,
            drag: cfg.engine.drag,
        };

        let mut rng = StdRng::seed_from_u64(parameters.seed);

        // Explicit bodies first so spring indices line up with the YAML order
        let mut bodies = Vec::new();
        if let Some(body_cfgs) = &cfg.bodies {
            for bc in body_cfgs {
                bodies.push(build_body(bc)?);
            }
        }

        if let Some(pop) = &cfg.population {
            validate_population(pop)?;
            for _ in 0..pop.count {
                bodies.push(draw_body(pop, &mut rng)?);
            }
        }

        let system = System {
            bodies,
            t: 0.0,
            container,
            restitution: parameters.restitution,
            sort_axis: 0,
        };

        // Forces: register the terms the engine settings select
        let mut forces = ForceSet::new();
        if engine.gravity {
            forces = forces.with(Gravity::default());
        }
        if engine.drag {
            forces = forces.with(AeroDrag::default());
        }
        if let Some(springs) = &cfg.springs {
            for sc in springs {
                ensure!(sc.a != sc.b, "spring endpoints must differ, got {}", sc.a);
                ensure!(
                    sc.a < system.bodies.len() && sc.b < system.bodies.len(),
                    "spring endpoint out of range ({}, {})",
                    sc.a,
                    sc.b
                );
                forces = forces.with(Spring {
                    a: sc.a,
                    b: sc.b,
                    rest_length: sc.rest_length,
                    ks: sc.ks,
                    kd: sc.kd,
                });
            }
        }

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
            population: cfg.population,
            rng,
        })
    }

    /// Append one randomly drawn body from the population ranges.
    ///
    /// Draws from the scenario's own seeded RNG, so a fixed input sequence
    /// reproduces the same spawns. A scenario without a population section
    /// has nothing to draw from and spawns nothing.
    pub fn spawn_random_body(&mut self) {
        let Some(pop) = &self.population else {
            return;
        };
        // Ranges were validated at build time; drawing cannot fail
        if let Ok(body) = draw_body(pop, &mut self.rng) {
            self.system.bodies.push(body);
        }
    }
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let mut body = Body::new(
        NVec3::from(bc.x),
        NVec3::from(bc.v),
        bc.m,
        bc.radius,
    )?;
    if let Some(color) = bc.color {
        body.color = color;
    }
    if bc.rigid.unwrap_or(false) {
        body.make_rigid();
    }
    Ok(body)
}

fn validate_population(pop: &PopulationConfig) -> Result<()> {
    ensure!(!pop.classes.is_empty(), "population needs at least one class");
    for class in &pop.classes {
        ensure!(class.m > 0.0, "population class mass must be > 0");
        ensure!(class.radius > 0.0, "population class radius must be > 0");
    }
    for i in 0..3 {
        ensure!(
            pop.pos_min[i] < pop.pos_max[i],
            "population pos range is empty on axis {i}"
        );
        ensure!(
            pop.vel_min[i] < pop.vel_max[i],
            "population vel range is empty on axis {i}"
        );
    }
    Ok(())
}

fn draw_body(pop: &PopulationConfig, rng: &mut StdRng) -> Result<Body> {
    let class = &pop.classes[rng.gen_range(0..pop.classes.len())];

    let x = NVec3::new(
        rng.gen_range(pop.pos_min[0]..pop.pos_max[0]),
        rng.gen_range(pop.pos_min[1]..pop.pos_max[1]),
        rng.gen_range(pop.pos_min[2]..pop.pos_max[2]),
    );
    let v = NVec3::new(
        rng.gen_range(pop.vel_min[0]..pop.vel_max[0]),
        rng.gen_range(pop.vel_min[1]..pop.vel_max[1]),
        rng.gen_range(pop.vel_min[2]..pop.vel_max[2]),
    );

    let mut body = Body::new(x, v, class.m, class.radius)?;
    body.color = class.color;
    Ok(body)
}
