use std::collections::VecDeque;

use glam::Vec2;

/// Base display radius every mass-derived particle keeps.
const BASE_RADIUS: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

impl Particle {
    /// Particle at rest with its radius derived from mass.
    pub fn new(position: Vec2, mass: f32, color: [f32; 4]) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            radius: Self::radius_for_mass(mass),
            color,
        }
    }

    /// Particle with an explicit radius and starting velocity.
    pub fn with_radius(
        position: Vec2,
        velocity: Vec2,
        mass: f32,
        radius: f32,
        color: [f32; 4],
    ) -> Self {
        Self {
            position,
            velocity,
            mass,
            radius,
            color,
        }
    }

    /// Display radius for a given mass.
    pub fn radius_for_mass(mass: f32) -> f32 {
        BASE_RADIUS + mass.powf(0.8)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// True if `point` falls inside the particle's disc.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }
}

/// Bounded FIFO of past positions, kept only for rendering a fading path.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a position, evicting the oldest entry once over capacity.
    pub fn record(&mut self, position: Vec2) {
        self.points.push_back(position);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

/// Drawing-surface extent in pixels, origin top-left, y down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}
