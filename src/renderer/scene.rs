use glam::Vec2;

use crate::input::{Param, ParamSet, PointerEvent};
use crate::panel;
use crate::properties::{CanvasBounds, Particle};
use crate::simulator::{
    circular_orbit_speed, BounceSimulator, OrbitalSimulator, SpringSimulator,
};

use super::{draw, shapes, Vertex};

const STAR_COLOR: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
const PLANET_COLOR: [f32; 4] = [0.3, 0.5, 1.0, 1.0];
const STARFIELD_COUNT: usize = 120;
const STARFIELD_SEED: u64 = 7;

/// Seam between a simulator and the render loop: one fixed step per
/// tick, pointer and parameter plumbing, per-frame tessellation, and
/// panel text. One implementation per demo.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Advance the simulation by one frame unit. Parameter values are
    /// read fresh here so a nudge lands on the very next step.
    fn step(&mut self);

    fn pointer(&mut self, event: PointerEvent);

    fn params(&self) -> &ParamSet;

    fn params_mut(&mut self) -> &mut ParamSet;

    /// Called after a parameter nudge with the parameter index, for
    /// controls that rewrite state instead of being read fresh.
    fn param_adjusted(&mut self, _index: usize) {}

    fn set_bounds(&mut self, bounds: CanvasBounds);

    /// Triangle-list geometry for this frame.
    fn triangles(&self) -> Vec<Vertex>;

    /// Line-list geometry for this frame.
    fn lines(&self) -> Vec<Vertex>;

    /// Multi-line info panel text.
    fn panel(&self) -> String;
}

pub struct BounceScene {
    sim: BounceSimulator,
    params: ParamSet,
}

impl BounceScene {
    pub fn new(sim: BounceSimulator) -> Self {
        let params = ParamSet::new(vec![
            Param::new("mass", sim.particle().mass, 1.0, 100.0, 1.0),
            Param::new("gravity", sim.gravity(), 0.05, 2.0, 0.05),
        ]);
        Self { sim, params }
    }
}

impl Scene for BounceScene {
    fn name(&self) -> &'static str {
        "bounce"
    }

    fn step(&mut self) {
        self.sim.set_mass(self.params.value(0));
        self.sim.set_gravity(self.params.value(1));
        self.sim.simulation_step();
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(at) => {
                self.sim.pointer_pressed(at);
            }
            PointerEvent::Moved(at) => self.sim.pointer_moved(at),
            PointerEvent::Released(at) => self.sim.pointer_released(at),
        }
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }

    fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.sim.set_bounds(bounds);
    }

    fn triangles(&self) -> Vec<Vertex> {
        let mut shape = vec![];

        let len = self.sim.trail().len();
        for (i, point) in self.sim.trail().iter().enumerate() {
            let alpha = i as f32 / len as f32 * 0.5;
            shape.append(&mut shapes::disc(*point, [1.0, 0.1, 0.1, alpha], 2.0, 8));
        }

        let particle = self.sim.particle();
        shape.append(&mut shapes::disc(
            particle.position,
            particle.color,
            particle.radius,
            48,
        ));
        shape
    }

    fn lines(&self) -> Vec<Vertex> {
        vec![]
    }

    fn panel(&self) -> String {
        panel::bounce(&self.sim)
    }
}

pub struct OrbitalScene {
    sim: OrbitalSimulator,
    params: ParamSet,
    stars: Vec<Vertex>,
}

impl OrbitalScene {
    /// Star at the canvas center, planet 300 px out, launched on a
    /// circular orbit.
    pub fn new(bounds: CanvasBounds) -> Self {
        let g_const = 0.5;
        let star_mass = 1000.0;
        let orbit_radius = 300.0;
        let center = bounds.center();
        let launch = circular_orbit_speed(g_const, star_mass, orbit_radius);

        let sim = OrbitalSimulator::builder()
            .gravitational_constant(g_const)
            .body(Particle::with_radius(
                center,
                Vec2::ZERO,
                star_mass,
                20.0,
                STAR_COLOR,
            ))
            .body(Particle::with_radius(
                center + Vec2::new(orbit_radius, 0.0),
                Vec2::new(0.0, launch),
                10.0,
                8.0,
                PLANET_COLOR,
            ))
            .trace(1)
            .build();

        let params = ParamSet::new(vec![
            Param::new("star mass", star_mass, 100.0, 3000.0, 50.0),
            Param::new("launch speed", launch, 0.0, 5.0, 0.1),
        ]);

        Self {
            sim,
            params,
            stars: draw::starfield(bounds, STARFIELD_COUNT, STARFIELD_SEED),
        }
    }
}

impl Scene for OrbitalScene {
    fn name(&self) -> &'static str {
        "orbital"
    }

    fn step(&mut self) {
        self.sim.bodies_mut()[0].mass = self.params.value(0);
        self.sim.simulation_step();
    }

    /// No drag gesture in this demo; the bodies are not grabbable.
    fn pointer(&mut self, _event: PointerEvent) {}

    fn params(&self) -> &ParamSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }

    fn param_adjusted(&mut self, index: usize) {
        // The launch-speed control rewrites the planet's vertical
        // velocity, it is not a per-step input.
        if index == 1 {
            self.sim.bodies_mut()[1].velocity.y = self.params.value(1);
        }
    }

    fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.stars = draw::starfield(bounds, STARFIELD_COUNT, STARFIELD_SEED);
    }

    fn triangles(&self) -> Vec<Vertex> {
        let mut shape = self.stars.clone();
        for body in self.sim.bodies() {
            shape.append(&mut shapes::disc(
                body.position,
                body.color,
                body.radius,
                48,
            ));
        }
        shape
    }

    fn lines(&self) -> Vec<Vertex> {
        let points: Vec<Vec2> = self.sim.trail().iter().copied().collect();
        let len = points.len();
        let mut shape = Vec::with_capacity(len.saturating_sub(1) * 2);

        for (i, pair) in points.windows(2).enumerate() {
            let alpha = i as f32 / len as f32;
            shape.append(&mut shapes::line(
                pair[0],
                pair[1],
                [1.0, 1.0, 1.0, alpha],
            ));
        }
        shape
    }

    fn panel(&self) -> String {
        panel::orbital(&self.sim)
    }
}

pub struct SpringScene {
    sim: SpringSimulator,
    params: ParamSet,
}

impl SpringScene {
    pub fn new(sim: SpringSimulator) -> Self {
        let params = ParamSet::new(vec![
            Param::new("mass", sim.particle().mass, 1.0, 100.0, 1.0),
            Param::new("spring k", sim.spring_constant(), 0.01, 1.0, 0.01),
            Param::new("damping c", sim.damping(), 0.0, 1.0, 0.01),
        ]);
        Self { sim, params }
    }
}

impl Scene for SpringScene {
    fn name(&self) -> &'static str {
        "spring"
    }

    fn step(&mut self) {
        self.sim.set_mass(self.params.value(0));
        self.sim.set_spring_constant(self.params.value(1));
        self.sim.set_damping(self.params.value(2));
        self.sim.simulation_step();
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(at) => {
                self.sim.pointer_pressed(at);
            }
            PointerEvent::Moved(at) => self.sim.pointer_moved(at),
            PointerEvent::Released(_) => self.sim.pointer_released(),
        }
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }

    fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.sim.set_bounds(bounds);
    }

    fn triangles(&self) -> Vec<Vertex> {
        let mut shape = shapes::disc(self.sim.anchor(), [0.6, 0.6, 0.6, 1.0], 4.0, 12);
        let particle = self.sim.particle();
        shape.append(&mut shapes::disc(
            particle.position,
            particle.color,
            particle.radius,
            48,
        ));
        shape
    }

    fn lines(&self) -> Vec<Vertex> {
        shapes::line(
            self.sim.anchor(),
            self.sim.particle().position,
            [1.0, 1.0, 1.0, 1.0],
        )
    }

    fn panel(&self) -> String {
        panel::spring(&self.sim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_scene_reads_params_fresh_each_step() {
        let mut scene = BounceScene::new(
            BounceSimulator::builder().canvas(800.0, 600.0).build(),
        );

        scene.params_mut().select(1);
        scene.params_mut().increase_selected();
        scene.step();

        assert!((scene.sim.gravity() - 0.55).abs() < 1e-6);
    }

    #[test]
    fn orbital_scene_launch_adjustment_rewrites_planet_velocity() {
        let mut scene = OrbitalScene::new(CanvasBounds::new(1280.0, 720.0));

        scene.params_mut().select(1);
        let index = scene.params_mut().increase_selected();
        scene.param_adjusted(index);

        let expected = scene.params.value(1);
        assert!((scene.sim.bodies()[1].velocity.y - expected).abs() < 1e-6);
    }

    #[test]
    fn orbital_scene_star_mass_lands_on_next_step() {
        let mut scene = OrbitalScene::new(CanvasBounds::new(1280.0, 720.0));

        scene.params_mut().select(0);
        scene.params_mut().increase_selected();
        scene.step();

        assert!((scene.sim.bodies()[0].mass - 1050.0).abs() < 1e-3);
    }

    #[test]
    fn spring_scene_tessellates_the_anchor_line() {
        let scene = SpringScene::new(SpringSimulator::builder().build());
        let lines = scene.lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].position[0], scene.sim.anchor().x);
    }
}
