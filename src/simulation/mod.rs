pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod broad_phase;
pub mod collision;
pub mod inertia;
pub mod scenario;
