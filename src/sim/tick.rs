//! Fixed-order simulation tick
//!
//! input → pointer → integrate → walls → collisions → trails. Each tick is one
//! fixed step; there is no delta time, so simulation speed follows the tick
//! rate the host sustains.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::motion::{integrate, resolve_boundaries};
use super::pointer::PointerSession;
use super::state::World;

/// Discrete input delivered by the host, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Escape key
    Escape,
    PointerPress { x: f32, y: f32 },
    PointerRelease,
    PointerMove { x: f32, y: f32 },
    /// Play area changed size (window resize, fullscreen toggle)
    Resize { width: f32, height: f32 },
}

/// Whether the host should keep ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running,
    Stopped,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub status: TickStatus,
    /// Ball-ball contacts resolved
    pub contacts: usize,
    /// Body released this tick and its launch velocity
    pub released: Option<(usize, Vec2)>,
}

/// Advance the world by one tick.
///
/// A stop request still lets the current tick finish; it takes effect at the
/// next tick boundary.
pub fn tick(world: &mut World, session: &mut PointerSession, events: &[InputEvent]) -> TickReport {
    session.begin_tick();

    let mut status = TickStatus::Running;
    let mut released = None;

    for event in events {
        match *event {
            InputEvent::Quit | InputEvent::Escape => {
                log::info!("Stop requested ({event:?})");
                status = TickStatus::Stopped;
            }
            InputEvent::PointerPress { x, y } => {
                session.press(world, Vec2::new(x, y));
            }
            InputEvent::PointerMove { x, y } => {
                session.motion(world, Vec2::new(x, y));
            }
            InputEvent::PointerRelease => {
                let fling = world.fling;
                let index = session.grabbed();
                if let (Some(index), Some(vel)) = (index, session.release(world, &fling)) {
                    released = Some((index, vel));
                }
            }
            InputEvent::Resize { width, height } => {
                world.resize(width, height);
            }
        }
    }

    integrate(world, session.grabbed());
    resolve_boundaries(world);
    let contacts = resolve_collisions(world);

    for body in &mut world.bodies {
        body.record_trail();
    }

    world.time_ticks += 1;

    TickReport {
        status,
        contacts,
        released,
    }
}
