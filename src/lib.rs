pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, Container, NVec3, System};
pub use simulation::forces::{AeroDrag, Force, ForceSet, Gravity, Spring};
pub use simulation::engine::{step, Engine};
pub use simulation::integrator::symplectic_euler;
pub use simulation::boundary::resolve_container;
pub use simulation::broad_phase::{select_sort_axis, sorted_order, sweep, update_endpoints};
pub use simulation::collision::{collision_impulse, resolve_overlap, spheres_collide};
pub use simulation::inertia::{box_inertia_tensor, RigidExtension};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyClass, BodyConfig, EngineConfig, ParametersConfig, PopulationConfig, ScenarioConfig,
    SpringConfig,
};

pub use visualization::vis3d::run_3d;

pub use benchmark::benchmark::{bench_sweep, bench_sweep_curve};
