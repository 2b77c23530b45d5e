use std::time::Instant;

use glam::{Mat4, Vec2};
use glium::{
    backend::glutin::SimpleWindowBuilder, glutin::surface::WindowSurface, implement_vertex,
    Display, Surface,
};
use thiserror::Error;
use tracing::{debug, error, info};
use winit::{
    event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
};

use crate::input::PointerEvent;
use crate::panel;
use crate::properties::CanvasBounds;

mod draw;
mod scene;
mod shapes;

pub use scene::{BounceScene, OrbitalScene, Scene, SpringScene};

const REDRAW_INTERVAL_MS: u128 = 16;
const PAUSE_DEBOUNCE_MS: u128 = 400;

#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}
implement_vertex!(Vertex, position, color);

/// Errors from the GL side of the house; all of them are fatal.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("shader compilation failed: {0}")]
    Program(#[from] glium::ProgramCreationError),
    #[error("vertex upload failed: {0}")]
    Buffer(#[from] glium::vertex::BufferCreationError),
    #[error("draw call failed: {0}")]
    Draw(#[from] glium::DrawError),
    #[error("frame presentation failed: {0}")]
    SwapBuffers(#[from] glium::SwapBuffersError),
}

/// Windowed driver for a [`Scene`]: one fixed simulation step per
/// displayed frame, pointer events forwarded to the scene, number keys
/// selecting a parameter and the arrow keys nudging it.
pub struct Renderer<S: Scene> {
    scene: S,
    width: u32,
    height: u32,
}

impl<S: Scene + 'static> Renderer<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            width: 1280,
            height: 720,
        }
    }

    /// Window size in pixels.
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Open the window and run the demo until it is closed.
    ///
    /// Setup errors are returned before the loop starts; draw errors
    /// end the loop. Space pauses, Escape closes.
    pub fn run(mut self) -> Result<(), RendererError> {
        let event_loop = EventLoopBuilder::new().build();
        let (window, display) = SimpleWindowBuilder::new()
            .with_title(self.scene.name())
            .with_inner_size(self.width, self.height)
            .build(&event_loop);

        let pipeline = draw::Pipeline::new(&display)?;

        let mut bounds = CanvasBounds::new(self.width as f32, self.height as f32);
        self.scene.set_bounds(bounds);

        info!(scene = self.scene.name(), "starting render loop");

        let mut cursor = Vec2::ZERO;
        let mut paused = false;
        let mut last_redraw = Instant::now();
        let mut last_pause = Instant::now();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            #[allow(clippy::single_match)]
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        *control_flow = ControlFlow::Exit;
                    }

                    WindowEvent::Resized(size) => {
                        bounds = CanvasBounds::new(size.width as f32, size.height as f32);
                        self.scene.set_bounds(bounds);
                    }

                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = Vec2::new(position.x as f32, position.y as f32);
                        self.scene.pointer(PointerEvent::Moved(cursor));
                    }

                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } => {
                        let event = match state {
                            ElementState::Pressed => PointerEvent::Pressed(cursor),
                            ElementState::Released => PointerEvent::Released(cursor),
                        };
                        self.scene.pointer(event);
                    }

                    WindowEvent::KeyboardInput { input, .. }
                        if input.state == ElementState::Pressed =>
                    {
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Escape) => {
                                *control_flow = ControlFlow::Exit;
                            }
                            Some(VirtualKeyCode::Space) => {
                                if last_pause.elapsed().as_millis() >= PAUSE_DEBOUNCE_MS {
                                    paused = !paused;
                                    last_pause = Instant::now();
                                }
                            }
                            Some(VirtualKeyCode::Up) => {
                                let index = self.scene.params_mut().increase_selected();
                                self.scene.param_adjusted(index);
                            }
                            Some(VirtualKeyCode::Down) => {
                                let index = self.scene.params_mut().decrease_selected();
                                self.scene.param_adjusted(index);
                            }
                            Some(keycode) => {
                                if let Some(index) = param_index(keycode) {
                                    self.scene.params_mut().select(index);
                                }
                            }
                            None => (),
                        }
                    }

                    _ => (),
                },
                _ => (),
            }

            if last_redraw.elapsed().as_millis() >= REDRAW_INTERVAL_MS {
                last_redraw = Instant::now();

                if !paused {
                    self.scene.step();
                }

                window.set_title(&format!(
                    "{} | {}",
                    self.scene.name(),
                    panel::params(self.scene.params())
                ));
                debug!(target: "physlab::panel", "\n{}", self.scene.panel());

                if let Err(err) = draw_frame(&display, &pipeline, &self.scene, bounds) {
                    error!(%err, "draw failed, shutting down");
                    *control_flow = ControlFlow::Exit;
                }
            }
        })
    }
}

fn draw_frame<S: Scene>(
    display: &Display<WindowSurface>,
    pipeline: &draw::Pipeline,
    scene: &S,
    bounds: CanvasBounds,
) -> Result<(), RendererError> {
    let mut target = display.draw();
    target.clear_color(0.02, 0.02, 0.05, 1.0);

    // Pixel-space projection: origin top-left, y down, like a 2D canvas.
    let projection = Mat4::orthographic_rh(0.0, bounds.width, bounds.height, 0.0, -1.0, 1.0);

    let drawn = pipeline
        .draw_lines(display, &mut target, &scene.lines(), &projection)
        .and_then(|_| {
            pipeline.draw_triangles(display, &mut target, &scene.triangles(), &projection)
        });

    // The frame must be finished even when a draw call failed.
    let finished = target.finish().map_err(RendererError::from);
    drawn.and(finished)
}

fn param_index(keycode: VirtualKeyCode) -> Option<usize> {
    match keycode {
        VirtualKeyCode::Key1 => Some(0),
        VirtualKeyCode::Key2 => Some(1),
        VirtualKeyCode::Key3 => Some(2),
        VirtualKeyCode::Key4 => Some(3),
        _ => None,
    }
}
