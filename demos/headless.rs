use glam::Vec2;

use physlab::panel;
use physlab::properties::{CanvasBounds, Particle};
use physlab::simulator::{
    circular_orbit_speed, BounceSimulator, OrbitalSimulator, SpringSimulator,
};

const STEPS: usize = 10_000;

/// Step every demo a fixed number of frames without opening a window.
fn main() {
    let mut bounce = BounceSimulator::builder().canvas(1280.0, 720.0).build();
    for _ in 0..STEPS {
        bounce.simulation_step();
    }
    println!("bounce after {STEPS} steps\n{}\n", panel::bounce(&bounce));

    let bounds = CanvasBounds::new(1280.0, 720.0);
    let center = bounds.center();
    let launch = circular_orbit_speed(0.5, 1000.0, 300.0);
    let mut orbital = OrbitalSimulator::builder()
        .gravitational_constant(0.5)
        .body(Particle::with_radius(
            center,
            Vec2::ZERO,
            1000.0,
            20.0,
            [1.0, 0.85, 0.2, 1.0],
        ))
        .body(Particle::with_radius(
            center + Vec2::new(300.0, 0.0),
            Vec2::new(0.0, launch),
            10.0,
            8.0,
            [0.3, 0.5, 1.0, 1.0],
        ))
        .trace(1)
        .build();
    for _ in 0..STEPS {
        orbital.simulation_step();
    }
    println!("orbital after {STEPS} steps\n{}\n", panel::orbital(&orbital));

    let mut spring = SpringSimulator::builder().canvas(1280.0, 720.0).build();
    for _ in 0..STEPS {
        spring.simulation_step();
    }
    println!("spring after {STEPS} steps\n{}", panel::spring(&spring));
}
