//! Input ports: parameter controls and pointer events, decoupled from any
//! windowing toolkit. Simulators read parameter values fresh each step.

use glam::Vec2;

/// Pointer press/move/release in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Moved(Vec2),
    Released(Vec2),
}

/// A single tunable scalar with a clamped range and a nudge step.
#[derive(Clone, Debug)]
pub struct Param {
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl Param {
    pub fn new(name: &'static str, value: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            name,
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increase(&mut self) {
        self.set(self.value + self.step);
    }

    pub fn decrease(&mut self) {
        self.set(self.value - self.step);
    }
}

/// Ordered parameter set with one selected entry for keyboard adjustment.
#[derive(Clone, Debug)]
pub struct ParamSet {
    params: Vec<Param>,
    selected: usize,
}

impl ParamSet {
    pub fn new(params: Vec<Param>) -> Self {
        Self {
            params,
            selected: 0,
        }
    }

    pub fn value(&self, index: usize) -> f32 {
        self.params[index].value()
    }

    /// Select a parameter by index; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.params.len() {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Nudge the selected parameter up and return its index.
    pub fn increase_selected(&mut self) -> usize {
        self.params[self.selected].increase();
        self.selected
    }

    /// Nudge the selected parameter down and return its index.
    pub fn decrease_selected(&mut self) -> usize {
        self.params[self.selected].decrease();
        self.selected
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_clamps_to_range() {
        let mut p = Param::new("gravity", 0.5, 0.05, 2.0, 0.05);
        p.set(5.0);
        assert_eq!(p.value(), 2.0);
        p.set(-1.0);
        assert_eq!(p.value(), 0.05);
    }

    #[test]
    fn nudges_move_by_step_and_stay_clamped() {
        let mut p = Param::new("mass", 99.5, 1.0, 100.0, 1.0);
        p.increase();
        assert_eq!(p.value(), 100.0);
        p.increase();
        assert_eq!(p.value(), 100.0);
        p.decrease();
        assert_eq!(p.value(), 99.0);
    }

    #[test]
    fn selection_ignores_out_of_range() {
        let mut set = ParamSet::new(vec![
            Param::new("a", 0.0, 0.0, 1.0, 0.1),
            Param::new("b", 0.0, 0.0, 1.0, 0.1),
        ]);
        set.select(1);
        assert_eq!(set.selected(), 1);
        set.select(5);
        assert_eq!(set.selected(), 1);
    }

    #[test]
    fn adjusting_reports_selected_index() {
        let mut set = ParamSet::new(vec![
            Param::new("a", 0.5, 0.0, 1.0, 0.1),
            Param::new("b", 0.5, 0.0, 1.0, 0.1),
        ]);
        set.select(1);
        let index = set.increase_selected();
        assert_eq!(index, 1);
        assert!((set.value(1) - 0.6).abs() < 1e-6);
        assert!((set.value(0) - 0.5).abs() < 1e-6);
    }
}
