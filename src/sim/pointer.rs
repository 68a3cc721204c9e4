//! Pointer grab, drag and fling
//!
//! A press inside a ball grabs it. While held, the ball follows the pointer
//! and is skipped by the integrator. On release its velocity is estimated
//! from the trail recorded during the drag.

use glam::Vec2;

use super::state::{Body, World};
use super::trail::Trail;

/// Release-velocity estimation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingParams {
    /// Max trail segments averaged
    pub window: usize,
    /// Weight of the newest segment; each older segment adds this again
    pub weight: f32,
    /// Final scale applied to the averaged velocity
    pub sensitivity: f32,
}

impl From<&crate::settings::Settings> for FlingParams {
    fn from(s: &crate::settings::Settings) -> Self {
        Self {
            window: s.trajectory_window,
            weight: s.trajectory_weight,
            sensitivity: s.pointer_sensitivity,
        }
    }
}

/// Pointer state carried between events
#[derive(Debug, Clone, Default)]
pub struct PointerSession {
    /// Index of the held body
    grabbed: Option<usize>,
    /// Last pointer coordinates seen
    pub last_pointer: Option<Vec2>,
    /// Body released this tick; cleared at the start of the next
    just_released: Option<usize>,
}

impl PointerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn just_released(&self) -> Option<usize> {
        self.just_released
    }

    /// Drop the one-tick release marker
    pub fn begin_tick(&mut self) {
        self.just_released = None;
    }

    /// Press at `p`. Grabs the first ball containing `p`, or re-anchors the
    /// ball already held. Returns the grabbed index.
    pub fn press(&mut self, world: &mut World, p: Vec2) -> Option<usize> {
        self.last_pointer = Some(p);
        let index = self.grabbed.or_else(|| world.body_at(p))?;

        let body = &mut world.bodies[index];
        body.pos = p;
        body.trail.reset(p);
        self.grabbed = Some(index);
        self.just_released = None;

        log::debug!("Grabbed body {} at ({:.1}, {:.1})", body.id, p.x, p.y);
        Some(index)
    }

    /// Pointer moved to `p`; drags the held ball if any
    pub fn motion(&mut self, world: &mut World, p: Vec2) {
        self.last_pointer = Some(p);
        if let Some(index) = self.grabbed {
            drag(&mut world.bodies[index], p);
        }
    }

    /// Let go of the held ball and fling it. Returns the launch velocity.
    pub fn release(&mut self, world: &mut World, params: &FlingParams) -> Option<Vec2> {
        let index = self.grabbed.take()?;
        let body = &mut world.bodies[index];
        body.vel = fling_velocity(&body.trail, params);
        self.just_released = Some(index);

        log::debug!(
            "Released body {} with velocity ({:.2}, {:.2})",
            body.id,
            body.vel.x,
            body.vel.y
        );
        Some(body.vel)
    }
}

/// Move a held ball to `p`; its live velocity is the step from the last
/// recorded trail point
pub fn drag(body: &mut Body, p: Vec2) {
    body.vel = p - body.trail.top();
    body.pos = p;
}

/// Weighted backward finite difference over the newest trail segments.
///
/// Segment `k` (0 = newest) gets weight `weight * (k + 1)`; at most
/// `window` segments count. With a single trail point there is no motion
/// history and the result is zero.
pub fn fling_velocity(trail: &Trail, params: &FlingParams) -> Vec2 {
    let count = params.window.min(trail.len() - 1);
    if count == 0 {
        return Vec2::ZERO;
    }

    let mut sum = Vec2::ZERO;
    let mut weight = params.weight;
    let mut weight_sum = 0.0;
    for segment in trail.recent_segments().take(count) {
        sum += segment * weight;
        weight_sum += weight;
        weight += params.weight;
    }

    sum / weight_sum * params.sensitivity
}
