//! Render snapshots
//!
//! Drawing lives in the host. Each tick the host captures a [`Frame`] and
//! uploads or rasterizes it however it likes; nothing here touches a GPU or
//! window.

pub mod shapes;
pub mod vertex;

pub use vertex::{CircleInstance, Vertex};

use serde::Serialize;

use crate::sim::World;

/// Read-only view of one tick, ready for drawing
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub background: [f32; 4],
    /// One filled circle per body, in body order
    pub circles: Vec<CircleInstance>,
    /// One line strip per body, in body order (may be empty)
    pub trails: Vec<Vec<Vertex>>,
}

impl Frame {
    /// Snapshot the world's bodies and trails
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.time_ticks,
            width: world.bounds.width,
            height: world.bounds.height,
            background: vertex::colors::BACKGROUND,
            circles: world.bodies.iter().map(shapes::body_circle).collect(),
            trails: world
                .bodies
                .iter()
                .map(|b| shapes::trail_strip(&b.trail, b.color.to_rgba()))
                .collect(),
        }
    }

    /// Circle instances as raw bytes for a vertex buffer upload
    pub fn circle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }
}
