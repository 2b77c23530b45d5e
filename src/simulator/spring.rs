use glam::Vec2;

use crate::properties::{CanvasBounds, Particle};

/// Damped spring-mass oscillator on the vertical axis, anchored at the
/// canvas center, with a direct-drag pointer mode.
#[derive(Clone, Debug)]
pub struct SpringSimulator {
    particle: Particle,
    anchor: Vec2,
    spring_constant: f32,
    damping: f32,
    dragging: bool,
}

impl SpringSimulator {
    pub fn builder() -> SpringSimulatorBuilder {
        SpringSimulatorBuilder::default()
    }

    /// Advance the oscillator by one frame unit. Only the vertical axis
    /// is simulated; a no-op while the particle is dragged.
    pub fn simulation_step(&mut self) {
        if self.dragging {
            return;
        }

        let displacement = self.particle.position.y - self.anchor.y;
        let spring_force = -self.spring_constant * displacement;
        let damping_force = -self.damping * self.particle.velocity.y;
        let ay = (spring_force + damping_force) / self.particle.mass;

        self.particle.velocity.y += ay;
        self.particle.position.y += self.particle.velocity.y;
    }

    /// Grab the particle if `at` falls inside it. The velocity is left
    /// untouched.
    pub fn pointer_pressed(&mut self, at: Vec2) -> bool {
        if !self.particle.contains(at) {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Only the y coordinate follows the pointer; x stays on the anchor
    /// line.
    pub fn pointer_moved(&mut self, at: Vec2) {
        if self.dragging {
            self.particle.position.y = at.y;
        }
    }

    /// Resume free oscillation with whatever velocity existed before the
    /// grab; nothing is derived from the gesture.
    pub fn pointer_released(&mut self) {
        self.dragging = false;
    }

    pub fn set_spring_constant(&mut self, spring_constant: f32) {
        self.spring_constant = spring_constant;
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping;
    }

    pub fn set_mass(&mut self, mass: f32) {
        self.particle.mass = mass;
    }

    /// Move the anchor, e.g. after a canvas resize.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.anchor = bounds.center();
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn particle_mut(&mut self) -> &mut Particle {
        &mut self.particle
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn spring_constant(&self) -> f32 {
        self.spring_constant
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Current vertical offset from the anchor.
    pub fn displacement(&self) -> f32 {
        self.particle.position.y - self.anchor.y
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Builder for `SpringSimulator`
pub struct SpringSimulatorBuilder {
    width: f32,
    height: f32,
    offset: f32,
    mass: f32,
    radius: f32,
    spring_constant: f32,
    damping: f32,
    color: [f32; 4],
}

impl SpringSimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas size in pixels; the anchor sits at the canvas center.
    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Starting offset below the anchor.
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Spring stiffness `k` in the restoring force `-k·displacement`.
    pub fn spring_constant(mut self, spring_constant: f32) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    /// Viscous damping coefficient `c` in the force `-c·vy`.
    /// `0.0` -> No damping
    pub fn damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Constructs an instance of `SpringSimulator`
    pub fn build(self) -> SpringSimulator {
        let anchor = CanvasBounds::new(self.width, self.height).center();
        let particle = Particle::with_radius(
            anchor + Vec2::new(0.0, self.offset),
            Vec2::ZERO,
            self.mass,
            self.radius,
            self.color,
        );

        SpringSimulator {
            particle,
            anchor,
            spring_constant: self.spring_constant,
            damping: self.damping,
            dragging: false,
        }
    }
}

impl Default for SpringSimulatorBuilder {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            offset: 100.0,
            mass: 10.0,
            radius: 20.0,
            spring_constant: 0.1,
            damping: 0.05,
            color: [0.2, 0.4, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oscillator(spring_constant: f32, damping: f32) -> SpringSimulator {
        SpringSimulator::builder()
            .canvas(800.0, 600.0)
            .mass(1.0)
            .spring_constant(spring_constant)
            .damping(damping)
            .offset(100.0)
            .build()
    }

    /// Largest |displacement| seen over `steps` steps.
    fn peak_displacement(sim: &mut SpringSimulator, steps: usize) -> f32 {
        let mut peak = 0.0f32;
        for _ in 0..steps {
            sim.simulation_step();
            peak = peak.max(sim.displacement().abs());
        }
        peak
    }

    #[test]
    fn at_equilibrium_nothing_moves() {
        let mut sim = oscillator(0.1, 0.05);
        sim.particle_mut().position.y = sim.anchor().y;

        for _ in 0..100 {
            sim.simulation_step();
        }

        assert_eq!(sim.displacement(), 0.0);
        assert_eq!(sim.particle().velocity.y, 0.0);
    }

    #[test]
    fn single_step_applies_spring_and_damping_forces() {
        let mut sim = oscillator(0.1, 0.05);
        sim.particle_mut().velocity.y = 2.0;

        // displacement 100: ay = (-0.1·100 - 0.05·2) / 1 = -10.1
        sim.simulation_step();

        let vy = sim.particle().velocity.y;
        assert!((vy - (2.0 - 10.1)).abs() < 1e-4);
        assert!((sim.displacement() - (100.0 + vy)).abs() < 1e-3);
    }

    #[test]
    fn undamped_oscillation_does_not_decay() {
        // ω = sqrt(k/m) = 0.1 rad/step, period ≈ 63 steps.
        let mut sim = oscillator(0.01, 0.0);

        let early = peak_displacement(&mut sim, 130);
        for _ in 0..1500 {
            sim.simulation_step();
        }
        let late = peak_displacement(&mut sim, 130);

        assert!(
            (early - late).abs() < early * 0.01,
            "amplitude drifted from {early} to {late}"
        );
    }

    #[test]
    fn damped_oscillation_decays_every_period() {
        // ω ≈ 0.316 rad/step, period ≈ 20 steps.
        let mut sim = oscillator(0.1, 0.05);

        let mut previous = peak_displacement(&mut sim, 20);
        for _ in 0..8 {
            let peak = peak_displacement(&mut sim, 20);
            assert!(
                peak < previous,
                "peak {peak} did not fall below {previous}"
            );
            previous = peak;
        }
    }

    #[test]
    fn drag_controls_y_only_and_pauses_stepping() {
        let mut sim = oscillator(0.1, 0.05);
        let center = sim.particle().position;

        assert!(sim.pointer_pressed(center));
        sim.pointer_moved(Vec2::new(999.0, 150.0));

        assert_eq!(sim.particle().position.x, center.x);
        assert_eq!(sim.particle().position.y, 150.0);

        let before = sim.particle().position;
        sim.simulation_step();
        assert_eq!(sim.particle().position, before);
    }

    #[test]
    fn release_keeps_the_pre_grab_velocity() {
        let mut sim = oscillator(0.1, 0.05);
        sim.particle_mut().velocity.y = 5.0;
        let center = sim.particle().position;

        sim.pointer_pressed(center);
        sim.pointer_moved(Vec2::new(center.x, 400.0));
        sim.pointer_released();

        assert_eq!(sim.particle().velocity.y, 5.0);
        assert!(!sim.is_dragging());
    }

    #[test]
    fn press_outside_radius_does_not_grab() {
        let mut sim = oscillator(0.1, 0.05);
        assert!(!sim.pointer_pressed(Vec2::ZERO));
        assert!(!sim.is_dragging());
    }
}
