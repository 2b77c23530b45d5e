//! Info-panel text: current kinematic values plus the numeric formulas
//! that produced them. Presentation only; nothing here feeds back into
//! simulation state.

use crate::input::ParamSet;
use crate::simulator::{gravitational_force, BounceSimulator, OrbitalSimulator, SpringSimulator};

/// Kinematic readout and formula lines for the bounce demo.
pub fn bounce(sim: &BounceSimulator) -> String {
    let p = sim.particle();
    let speed = if p.speed() < 1.0 { 0.0 } else { p.speed() };
    let vx = if p.velocity.x.abs() < 1.0 {
        0.0
    } else {
        p.velocity.x
    };
    let vy = if p.velocity.y.abs() < 1.0 {
        0.0
    } else {
        p.velocity.y
    };
    let height = sim.bounds().height - p.position.y;
    let gravity = sim.gravity();
    let mass = p.mass;
    let radius = p.radius;
    let prev_vy = sim.prev_velocity().y;
    let delta_vy = p.velocity.y - prev_vy;
    let next_vy = prev_vy + gravity;

    format!(
        "Speed (v): {speed:.2} px/s\n\
         Velocity X (vx): {vx:.2} px/s\n\
         Velocity Y (vy): {vy:.2} px/s\n\
         Height (y): {height:.2} px\n\
         Gravity (g): {gravity:.2} px/s^2\n\
         Mass (m): {mass:.0} units\n\
         Radius (r): {radius:.0} px\n\
         \n\
         Formulas\n\
         Acceleration Y: a = dvy/dt = ({:.2} - {prev_vy:.2}) / 1 = {delta_vy:.2} px/s^2\n\
         Velocity Y: vy = vy0 + a * t = {prev_vy:.2} + {gravity:.2} * 1 = {next_vy:.2} px/s",
        p.velocity.y,
    )
}

/// Two-body readout for the orbital demo; expects the star at index 0
/// and the planet at index 1.
pub fn orbital(sim: &OrbitalSimulator) -> String {
    let star = &sim.bodies()[0];
    let planet = &sim.bodies()[1];
    let g_const = sim.g_const();
    let star_mass = star.mass;
    let planet_mass = planet.mass;
    let distance = sim.separation(0, 1);
    let force = gravitational_force(g_const, star, planet).length();

    format!(
        "Star Mass: {star_mass:.0}\n\
         Planet Mass: {planet_mass:.0}\n\
         Distance: {distance:.2} px\n\
         \n\
         Formulas\n\
         Gravitational Force:\n\
         F = G * (m1 * m2) / r^2\n\
         F = {g_const} * ({star_mass:.0} * {planet_mass:.0}) / {distance:.2}^2 = {force:.2} N"
    )
}

/// Parameter readout for the spring demo.
pub fn spring(sim: &SpringSimulator) -> String {
    let mass = sim.particle().mass;
    let spring_constant = sim.spring_constant();
    let damping = sim.damping();
    let vy = sim.particle().velocity.y;

    format!(
        "Mass: {mass:.0} kg\n\
         Spring Constant (k): {spring_constant:.2}\n\
         Damping (c): {damping:.2}\n\
         Velocity Y: {vy:.2}"
    )
}

/// One-line parameter summary for the window title. The selected
/// parameter is starred.
pub fn params(params: &ParamSet) -> String {
    params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let marker = if i == params.selected() { "*" } else { "" };
            format!("[{}]{} {}: {:.2}", i + 1, marker, param.name(), param.value())
        })
        .collect::<Vec<_>>()
        .join("  ")
}
