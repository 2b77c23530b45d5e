use glam::{Mat4, Vec2};
use glium::{
    glutin::surface::WindowSurface, index::PrimitiveType, uniform, Display, Frame, Program,
    Surface,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::properties::CanvasBounds;

use super::{shapes, RendererError, Vertex};

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec2 position;
in vec4 color;
out vec4 vertex_color;

uniform mat4 projection;

void main() {
    vertex_color = color;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

in vec4 vertex_color;
out vec4 color;

void main() {
    color = vec4(vertex_color);
}
"#;

/// Compiled shader program plus the draw-call plumbing shared by every
/// scene. Built once at startup; compilation failure is fatal.
pub struct Pipeline {
    program: Program,
}

impl Pipeline {
    pub fn new(display: &Display<WindowSurface>) -> Result<Self, RendererError> {
        let program =
            Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None)?;
        Ok(Self { program })
    }

    pub fn draw_triangles(
        &self,
        display: &Display<WindowSurface>,
        target: &mut Frame,
        vertices: &[Vertex],
        projection: &Mat4,
    ) -> Result<(), RendererError> {
        self.draw(
            display,
            target,
            vertices,
            PrimitiveType::TrianglesList,
            projection,
        )
    }

    pub fn draw_lines(
        &self,
        display: &Display<WindowSurface>,
        target: &mut Frame,
        vertices: &[Vertex],
        projection: &Mat4,
    ) -> Result<(), RendererError> {
        self.draw(
            display,
            target,
            vertices,
            PrimitiveType::LinesList,
            projection,
        )
    }

    fn draw(
        &self,
        display: &Display<WindowSurface>,
        target: &mut Frame,
        vertices: &[Vertex],
        primitive: PrimitiveType,
        projection: &Mat4,
    ) -> Result<(), RendererError> {
        if vertices.is_empty() {
            return Ok(());
        }

        let vertex_buffer = glium::VertexBuffer::new(display, vertices)?;
        let indices = glium::index::NoIndices(primitive);
        let uniforms = uniform! {
            projection: projection.to_cols_array_2d(),
        };
        let params = glium::DrawParameters {
            blend: glium::Blend::alpha_blending(),
            ..Default::default()
        };

        target.draw(&vertex_buffer, indices, &self.program, &uniforms, &params)?;
        Ok(())
    }
}

/// Dim, deterministic background stars for the orbital scene.
pub fn starfield(bounds: CanvasBounds, count: usize, seed: u64) -> Vec<Vertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shape = Vec::with_capacity(count * 18);

    for _ in 0..count {
        let pos = Vec2::new(
            rng.gen_range(0.0..bounds.width.max(1.0)),
            rng.gen_range(0.0..bounds.height.max(1.0)),
        );
        let alpha = rng.gen_range(0.15..0.6);
        shape.append(&mut shapes::disc(pos, [1.0, 1.0, 1.0, alpha], 1.5, 6));
    }

    shape
}
