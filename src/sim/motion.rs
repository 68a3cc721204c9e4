//! Gravity integration and wall response
//!
//! Both passes work in per-tick units: velocities are pixels per tick and
//! gravity is pixels per tick².

use super::state::{Body, Bounds, Physics, World};

/// Advance every body except `held` by its velocity, then apply gravity to
/// those still above the floor
pub fn integrate(world: &mut World, held: Option<usize>) {
    let bounds = world.bounds;
    let gravity = world.physics.gravity;
    for (i, body) in world.bodies.iter_mut().enumerate() {
        if held == Some(i) {
            continue;
        }
        integrate_body(body, bounds, gravity);
    }
}

/// Gravity only accumulates while airborne so a ball resting on the floor
/// stays put.
pub fn integrate_body(body: &mut Body, bounds: Bounds, gravity: f32) {
    body.pos += body.vel;
    if body.pos.y < bounds.floor(body.radius()) {
        body.vel.y += gravity;
    }
}

/// Reflect, damp and clamp every body against the four walls
pub fn resolve_boundaries(world: &mut World) {
    let bounds = world.bounds;
    let physics = world.physics;
    for body in &mut world.bodies {
        resolve_body_boundaries(body, bounds, &physics);
    }
}

/// Floor/ceiling first, then side walls; both may fire in one tick.
pub fn resolve_body_boundaries(body: &mut Body, bounds: Bounds, physics: &Physics) {
    let r = body.radius();

    let floor = bounds.floor(r);
    if body.pos.y >= floor || body.pos.y < r {
        body.vel.y = rebound(body.vel.y, physics.floor_damping, physics.min_rest_speed_y);
        body.pos.y = if body.pos.y >= floor { floor } else { r };
        body.vel.x *= physics.bounce_friction;
    }

    let right = bounds.right(r);
    if body.pos.x >= right || body.pos.x < r {
        body.vel.x = rebound(body.vel.x, physics.wall_damping, physics.min_rest_speed_x);
        body.pos.x = if body.pos.x >= right { right } else { r };
    }
}

/// Reflected, damped velocity along one axis. A rebound no faster than
/// `rest_speed` settles to exactly zero.
#[inline]
pub fn rebound(v: f32, damping: f32, rest_speed: f32) -> f32 {
    let reflected = -v * damping;
    if reflected.abs() <= rest_speed {
        0.0
    } else {
        reflected
    }
}
