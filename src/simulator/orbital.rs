use glam::Vec2;

use crate::properties::{Particle, Trail};

/// Gravitational pull on `on` from `from`: `F = G·m1·m2 / r²` along the
/// unit vector between centers.
///
/// There is no minimum-separation guard; coincident bodies produce a
/// non-finite force that propagates into the integration state.
pub fn gravitational_force(g_const: f32, on: &Particle, from: &Particle) -> Vec2 {
    let direction = from.position - on.position;
    let magnitude = g_const * on.mass * from.mass / direction.length_squared();
    direction.normalize_or(Vec2::ZERO) * magnitude
}

/// Speed of a circular orbit of radius `r` around a body of `central_mass`.
pub fn circular_orbit_speed(g_const: f32, central_mass: f32, r: f32) -> f32 {
    (g_const * central_mass / r).sqrt()
}

/// Mutual-gravity system integrated with semi-implicit Euler. Written
/// over any number of bodies; the shipped demo uses a star and a planet.
#[derive(Clone, Debug)]
pub struct OrbitalSimulator {
    bodies: Vec<Particle>,
    g_const: f32,
    trail: Trail,
    traced: usize,
}

impl OrbitalSimulator {
    pub fn builder() -> OrbitalSimulatorBuilder {
        OrbitalSimulatorBuilder::default()
    }

    /// Advance all bodies by one frame unit.
    ///
    /// Forces are accumulated from the pre-step positions of every body
    /// before any body moves, so no force sees a partially updated
    /// system. Pair forces are applied equal and opposite.
    pub fn simulation_step(&mut self) {
        let mut forces = vec![Vec2::ZERO; self.bodies.len()];

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let force = gravitational_force(self.g_const, &self.bodies[i], &self.bodies[j]);
                forces[i] += force;
                forces[j] -= force;
            }
        }

        for (body, force) in self.bodies.iter_mut().zip(forces) {
            body.velocity += force / body.mass;
            body.position += body.velocity;
        }

        if let Some(traced) = self.bodies.get(self.traced) {
            self.trail.record(traced.position);
        }
    }

    /// Net gravitational force on one body from all others, computed
    /// from current positions.
    pub fn net_force(&self, index: usize) -> Vec2 {
        let mut net = Vec2::ZERO;
        for (other_index, other) in self.bodies.iter().enumerate() {
            if other_index != index {
                net += gravitational_force(self.g_const, &self.bodies[index], other);
            }
        }
        net
    }

    /// Distance between two bodies' centers.
    pub fn separation(&self, a: usize, b: usize) -> f32 {
        self.bodies[a].position.distance(self.bodies[b].position)
    }

    pub fn bodies(&self) -> &[Particle] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Particle] {
        &mut self.bodies
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn g_const(&self) -> f32 {
        self.g_const
    }
}

/// Builder for `OrbitalSimulator`
pub struct OrbitalSimulatorBuilder {
    bodies: Vec<Particle>,
    g_const: f32,
    trail_capacity: usize,
    traced: usize,
}

impl OrbitalSimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gravitational constant; fixed for the lifetime of the simulator.
    pub fn gravitational_constant(mut self, g_const: f32) -> Self {
        self.g_const = g_const;
        self
    }

    /// Add a body. Insertion order determines body indices.
    pub fn body(mut self, body: Particle) -> Self {
        self.bodies.push(body);
        self
    }

    /// Index of the body whose path is recorded in the trail.
    pub fn trace(mut self, index: usize) -> Self {
        self.traced = index;
        self
    }

    /// How many past positions the trail keeps.
    pub fn trail_capacity(mut self, trail_capacity: usize) -> Self {
        self.trail_capacity = trail_capacity;
        self
    }

    /// Constructs an instance of `OrbitalSimulator`
    pub fn build(self) -> OrbitalSimulator {
        OrbitalSimulator {
            bodies: self.bodies,
            g_const: self.g_const,
            trail: Trail::new(self.trail_capacity),
            traced: self.traced,
        }
    }
}

impl Default for OrbitalSimulatorBuilder {
    fn default() -> Self {
        Self {
            bodies: vec![],
            g_const: 0.5,
            trail_capacity: 400,
            traced: 1,
        }
    }
}
