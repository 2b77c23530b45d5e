//! Fixed-step simulators, one per demo. Every step advances simulation
//! time by exactly one frame unit; callers decide the cadence.

mod bounce;
mod orbital;
mod spring;

pub use bounce::{BounceSimulator, BounceSimulatorBuilder};
pub use orbital::{
    circular_orbit_speed, gravitational_force, OrbitalSimulator, OrbitalSimulatorBuilder,
};
pub use spring::{SpringSimulator, SpringSimulatorBuilder};
