//! Geometry for bodies and their trails

use super::vertex::{CircleInstance, Vertex, colors};
use crate::sim::{Body, Trail};

/// Filled-circle instance for a body
pub fn body_circle(body: &Body) -> CircleInstance {
    CircleInstance {
        center: body.pos.to_array(),
        radius: body.radius(),
        color: body.color.to_rgba(),
    }
}

/// Line strip through the trail, oldest to newest, fading toward the oldest
/// point. A single-point trail yields an empty strip.
pub fn trail_strip(trail: &Trail, color: [f32; 4]) -> Vec<Vertex> {
    if trail.len() < 2 {
        return Vec::new();
    }

    let last = (trail.len() - 1) as f32;
    trail
        .iter()
        .enumerate()
        .map(|(i, p)| {
            // 0 at the oldest point, 1 at the newest
            let t = i as f32 / last;
            let alpha =
                colors::TRAIL_TAIL_ALPHA + (colors::TRAIL_ALPHA - colors::TRAIL_TAIL_ALPHA) * t;
            Vertex::new(p.x, p.y, [color[0], color[1], color[2], color[3] * alpha])
        })
        .collect()
}
