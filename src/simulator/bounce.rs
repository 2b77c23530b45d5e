use glam::Vec2;

use crate::properties::{CanvasBounds, Particle, Trail};

/// Particle under constant downward acceleration inside a box, with
/// restitution on every wall, per-step velocity decay, and a
/// drag-to-throw pointer gesture.
#[derive(Clone, Debug)]
pub struct BounceSimulator {
    particle: Particle,
    trail: Trail,
    bounds: CanvasBounds,
    gravity: f32,
    bounce_factor: f32,
    drag_decay: f32,
    rest_speed: f32,
    throw_scale: f32,
    max_throw_speed: f32,
    grab_origin: Option<Vec2>,
    prev_velocity: Vec2,
}

impl BounceSimulator {
    pub fn builder() -> BounceSimulatorBuilder {
        BounceSimulatorBuilder::default()
    }

    /// Advance the particle by one frame unit.
    ///
    /// A no-op while the particle is grabbed; the pointer drives the
    /// position directly until release.
    pub fn simulation_step(&mut self) {
        if self.grab_origin.is_some() {
            return;
        }

        self.prev_velocity = self.particle.velocity;

        self.particle.velocity.y += self.gravity;
        self.particle.position += self.particle.velocity;
        self.particle.velocity *= self.drag_decay;

        self.resolve_collisions();

        self.trail.record(self.particle.position);
    }

    fn resolve_collisions(&mut self) {
        let r = self.particle.radius;
        let p = &mut self.particle;

        if p.position.y + r > self.bounds.height {
            p.position.y = self.bounds.height - r;
            p.velocity.y *= -self.bounce_factor;

            // Rest condition: a floor hit that leaves the particle slower
            // than the threshold on both axes ends the micro-bouncing.
            if p.velocity.y.abs() < self.rest_speed && p.velocity.x.abs() < self.rest_speed {
                p.velocity = Vec2::ZERO;
            }
        }

        if p.position.y - r < 0.0 {
            p.position.y = r;
            p.velocity.y *= -self.bounce_factor;
        }

        if p.position.x + r > self.bounds.width {
            p.position.x = self.bounds.width - r;
            p.velocity.x *= -self.bounce_factor;
        }

        if p.position.x - r < 0.0 {
            p.position.x = r;
            p.velocity.x *= -self.bounce_factor;
        }
    }

    /// Grab the particle if `at` falls inside it. A grab zeroes the
    /// velocity and clears the trail.
    pub fn pointer_pressed(&mut self, at: Vec2) -> bool {
        if !self.particle.contains(at) {
            return false;
        }
        self.grab_origin = Some(at);
        self.particle.velocity = Vec2::ZERO;
        self.trail.clear();
        true
    }

    pub fn pointer_moved(&mut self, at: Vec2) {
        if self.grab_origin.is_some() {
            self.particle.position = at;
        }
    }

    /// Release a grabbed particle, throwing it along the gesture.
    ///
    /// The throw velocity is the pointer displacement since the grab
    /// scaled by `throw_scale / mass`, capped at `max_throw_speed` by
    /// uniform rescaling.
    pub fn pointer_released(&mut self, at: Vec2) {
        if let Some(origin) = self.grab_origin.take() {
            let throw = (at - origin) * (self.throw_scale / self.particle.mass);
            self.particle.velocity = throw.clamp_length_max(self.max_throw_speed);
        }
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
    }

    /// Update the mass and the radius derived from it.
    pub fn set_mass(&mut self, mass: f32) {
        self.particle.mass = mass;
        self.particle.radius = Particle::radius_for_mass(mass);
    }

    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn particle_mut(&mut self) -> &mut Particle {
        &mut self.particle
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Velocity at the start of the last completed step, kept for the
    /// info panel's acceleration readout.
    pub fn prev_velocity(&self) -> Vec2 {
        self.prev_velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_origin.is_some()
    }
}

/// Builder for `BounceSimulator`
pub struct BounceSimulatorBuilder {
    width: f32,
    height: f32,
    start: Option<Vec2>,
    mass: f32,
    radius: Option<f32>,
    gravity: f32,
    bounce_factor: f32,
    drag_decay: f32,
    rest_speed: f32,
    throw_scale: f32,
    max_throw_speed: f32,
    trail_capacity: usize,
    color: [f32; 4],
}

impl BounceSimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas size in pixels.
    pub fn canvas(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Starting position. Defaults to the top middle of the canvas.
    pub fn start(mut self, position: Vec2) -> Self {
        self.start = Some(position);
        self
    }

    /// Particle mass. Also determines the radius unless one is given
    /// explicitly.
    pub fn mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Fixed display radius, overriding the mass-derived one.
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Downward acceleration per step.
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Fraction of velocity kept (sign-flipped) after a collision.
    pub fn bounce_factor(mut self, bounce_factor: f32) -> Self {
        self.bounce_factor = bounce_factor;
        self
    }

    /// Multiplicative per-step velocity decay modelling air drag.
    /// `1.0` -> No decay
    pub fn drag_decay(mut self, drag_decay: f32) -> Self {
        self.drag_decay = drag_decay;
        self
    }

    /// Below this per-axis speed a floor hit brings the particle to rest.
    pub fn rest_speed(mut self, rest_speed: f32) -> Self {
        self.rest_speed = rest_speed;
        self
    }

    /// Gesture-to-velocity factor; the effective scale is divided by mass
    /// so heavier particles throw slower.
    pub fn throw_scale(mut self, throw_scale: f32) -> Self {
        self.throw_scale = throw_scale;
        self
    }

    /// Speed cap applied to the release throw.
    pub fn max_throw_speed(mut self, max_throw_speed: f32) -> Self {
        self.max_throw_speed = max_throw_speed;
        self
    }

    /// How many past positions the trail keeps.
    pub fn trail_capacity(mut self, trail_capacity: usize) -> Self {
        self.trail_capacity = trail_capacity;
        self
    }

    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Constructs an instance of `BounceSimulator`
    pub fn build(self) -> BounceSimulator {
        let start = self
            .start
            .unwrap_or_else(|| Vec2::new(self.width / 2.0, 50.0));
        let mut particle = Particle::new(start, self.mass, self.color);
        if let Some(radius) = self.radius {
            particle.radius = radius;
        }

        BounceSimulator {
            particle,
            trail: Trail::new(self.trail_capacity),
            bounds: CanvasBounds::new(self.width, self.height),
            gravity: self.gravity,
            bounce_factor: self.bounce_factor,
            drag_decay: self.drag_decay,
            rest_speed: self.rest_speed,
            throw_scale: self.throw_scale,
            max_throw_speed: self.max_throw_speed,
            grab_origin: None,
            prev_velocity: Vec2::ZERO,
        }
    }
}

impl Default for BounceSimulatorBuilder {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            start: None,
            mass: 10.0,
            radius: None,
            gravity: 0.5,
            bounce_factor: 0.6,
            drag_decay: 0.99,
            rest_speed: 1.0,
            throw_scale: 20.0,
            max_throw_speed: 100.0,
            trail_capacity: 450,
            color: [0.2, 0.4, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn mid_air() -> BounceSimulator {
        BounceSimulator::builder()
            .canvas(800.0, 600.0)
            .radius(20.0)
            .start(Vec2::new(400.0, 100.0))
            .build()
    }

    #[test]
    fn free_flight_integrates_velocity_then_decays() {
        let mut sim = mid_air();
        sim.particle_mut().velocity = Vec2::new(3.0, 0.0);

        sim.simulation_step();

        let p = sim.particle();
        // vy += g, positions move by the updated velocity, then both
        // components decay by the drag factor.
        assert!(approx_eq(p.position.x, 403.0));
        assert!(approx_eq(p.position.y, 100.5));
        assert!(approx_eq(p.velocity.x, 3.0 * 0.99));
        assert!(approx_eq(p.velocity.y, 0.5 * 0.99));
    }

    #[test]
    fn gravity_raises_vy_by_g_each_step() {
        let mut sim = mid_air();
        let g = sim.gravity();

        for _ in 0..5 {
            let before = sim.particle().velocity.y;
            sim.simulation_step();
            let after = sim.particle().velocity.y;
            // Before the decay multiply, vy grew by exactly g.
            assert!(approx_eq(after / 0.99, before + g));
        }
    }

    #[test]
    fn floor_collision_clamps_and_reflects() {
        let mut sim = mid_air();
        sim.particle_mut().position = Vec2::new(400.0, 585.0);
        sim.particle_mut().velocity = Vec2::new(0.0, 4.0);

        sim.simulation_step();

        let p = sim.particle();
        assert_eq!(p.position.y + p.radius, 600.0);
        // vy went through += g, the decay multiply, then the bounce flip.
        assert!(approx_eq(p.velocity.y, -(4.5 * 0.99) * 0.6));
    }

    #[test]
    fn slow_floor_hit_comes_to_rest() {
        let mut sim = mid_air();
        sim.particle_mut().position = Vec2::new(400.0, 580.2);
        sim.particle_mut().velocity = Vec2::new(0.5, 0.3);

        sim.simulation_step();

        assert_eq!(sim.particle().velocity, Vec2::ZERO);
        assert_eq!(sim.particle().position.y, 580.0);
    }

    #[test]
    fn ceiling_reflects_without_rest_snap() {
        let mut sim = mid_air();
        sim.particle_mut().position = Vec2::new(400.0, 25.0);
        sim.particle_mut().velocity = Vec2::new(0.0, -10.0);

        sim.simulation_step();

        let p = sim.particle();
        assert_eq!(p.position.y, p.radius);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn walls_clamp_and_reflect_vx() {
        let mut sim = mid_air();
        sim.particle_mut().position = Vec2::new(790.0, 300.0);
        sim.particle_mut().velocity = Vec2::new(12.0, 0.0);

        sim.simulation_step();

        let p = sim.particle();
        assert_eq!(p.position.x + p.radius, 800.0);
        assert!(p.velocity.x < 0.0);

        sim.particle_mut().position = Vec2::new(10.0, 300.0);
        sim.particle_mut().velocity = Vec2::new(-12.0, 0.0);

        sim.simulation_step();

        let p = sim.particle();
        assert_eq!(p.position.x, p.radius);
        assert!(p.velocity.x > 0.0);
    }

    #[test]
    fn settles_on_the_floor_from_a_drop() {
        let mut sim = BounceSimulator::builder()
            .canvas(800.0, 600.0)
            .radius(20.0)
            .start(Vec2::new(400.0, 50.0))
            .gravity(0.5)
            .build();

        for _ in 0..5000 {
            sim.simulation_step();
        }

        assert!(approx_eq(sim.particle().position.y, 580.0));
        assert_eq!(sim.particle().velocity, Vec2::ZERO);
    }

    #[test]
    fn grab_zeroes_velocity_and_clears_trail() {
        let mut sim = mid_air();
        sim.simulation_step();
        assert!(!sim.trail().is_empty());

        let center = sim.particle().position;
        assert!(sim.pointer_pressed(center));
        assert!(sim.is_dragging());
        assert_eq!(sim.particle().velocity, Vec2::ZERO);
        assert!(sim.trail().is_empty());
    }

    #[test]
    fn press_outside_radius_does_not_grab() {
        let mut sim = mid_air();
        assert!(!sim.pointer_pressed(Vec2::new(0.0, 0.0)));
        assert!(!sim.is_dragging());
    }

    #[test]
    fn dragged_particle_follows_pointer_and_ignores_steps() {
        let mut sim = mid_air();
        let center = sim.particle().position;
        sim.pointer_pressed(center);

        sim.pointer_moved(Vec2::new(222.0, 333.0));
        assert_eq!(sim.particle().position, Vec2::new(222.0, 333.0));

        sim.simulation_step();
        assert_eq!(sim.particle().position, Vec2::new(222.0, 333.0));
        assert_eq!(sim.particle().velocity, Vec2::ZERO);
    }

    #[test]
    fn release_throws_along_gesture_scaled_by_mass() {
        let mut sim = BounceSimulator::builder()
            .canvas(800.0, 600.0)
            .mass(20.0)
            .start(Vec2::new(400.0, 300.0))
            .build();
        let center = sim.particle().position;

        sim.pointer_pressed(center);
        sim.pointer_released(center + Vec2::new(10.0, -5.0));

        // throw_scale / mass = 20 / 20 = 1
        assert_eq!(sim.particle().velocity, Vec2::new(10.0, -5.0));
        assert!(!sim.is_dragging());
    }

    #[test]
    fn release_clamps_speed_and_keeps_direction() {
        let mut sim = BounceSimulator::builder()
            .canvas(800.0, 600.0)
            .mass(1.0)
            .start(Vec2::new(400.0, 300.0))
            .build();
        let center = sim.particle().position;

        sim.pointer_pressed(center);
        // Raw throw would be (2000, 0) at throw_scale/mass = 20.
        sim.pointer_released(center + Vec2::new(100.0, 0.0));

        let v = sim.particle().velocity;
        assert!(approx_eq(v.length(), 100.0));
        assert!(approx_eq(v.y, 0.0));
        assert!(v.x > 0.0);
    }

    #[test]
    fn steps_append_to_the_trail() {
        let mut sim = mid_air();
        for _ in 0..7 {
            sim.simulation_step();
        }
        assert_eq!(sim.trail().len(), 7);
    }
}
