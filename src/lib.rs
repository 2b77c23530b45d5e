//! # Example
//! ```rust,no_run
//! use physlab::renderer::{BounceScene, Renderer};
//! use physlab::simulator::BounceSimulator;
//!
//! let simulator = BounceSimulator::builder().build();
//! let renderer = Renderer::new(BounceScene::new(simulator));
//! renderer.run().unwrap();
//! ```

pub mod input;
pub mod panel;
pub mod properties;
pub mod renderer;
pub mod simulator;
