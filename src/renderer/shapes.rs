use std::f32::consts::PI;

use glam::Vec2;

use super::Vertex;

/// Filled disc as a triangle fan around `pos`.
pub fn disc(pos: Vec2, color: [f32; 4], r: f32, res: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(3 * res);
    let a = 2.0 * PI / res as f32;

    for i in 0..res {
        let i = i as f32;
        shape.push(Vertex {
            position: [pos.x, pos.y],
            color,
        });
        shape.push(Vertex {
            position: [pos.x + r * f32::sin(a * i), pos.y + r * f32::cos(a * i)],
            color,
        });
        shape.push(Vertex {
            position: [
                pos.x + r * f32::sin(a * (i + 1.0)),
                pos.y + r * f32::cos(a * (i + 1.0)),
            ],
            color,
        });
    }

    shape
}

/// Single line segment.
pub fn line(p1: Vec2, p2: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex {
            position: [p1.x, p1.y],
            color,
        },
        Vertex {
            position: [p2.x, p2.y],
            color,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_emits_one_triangle_per_segment() {
        let shape = disc(Vec2::new(5.0, 5.0), [1.0; 4], 2.0, 12);
        assert_eq!(shape.len(), 36);
    }

    #[test]
    fn disc_rim_sits_on_the_radius() {
        let shape = disc(Vec2::ZERO, [1.0; 4], 3.0, 8);
        let rim = Vec2::from_array([shape[1].position[0], shape[1].position[1]]);
        assert!((rim.length() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn line_keeps_endpoints() {
        let shape = line(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(shape[0].position, [1.0, 2.0]);
        assert_eq!(shape[1].position, [3.0, 4.0]);
    }
}
