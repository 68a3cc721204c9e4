//! Ball-ball collision detection and response
//!
//! Pairs are visited in ascending index order and resolved one at a time, so
//! a ball touching two others in the same tick sees the first contact's
//! result before the second. There is no iteration to convergence.

use glam::Vec2;

use super::state::{Body, World};
use crate::within_radius;

/// Contact frame between two overlapping balls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first ball's center toward the second's
    pub normal: Vec2,
    /// Unit tangent (normal rotated +90°)
    pub tangent: Vec2,
    /// Center distance
    pub distance: f32,
    /// `|r1 + r2 - distance|`, split evenly between the two balls
    pub overlap: f32,
}

/// Contact frame if the balls touch or overlap. Coincident centers have no
/// defined normal and yield `None`.
pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
    let reach = a.radius() + b.radius();
    if !within_radius(a.pos, b.pos, reach) {
        return None;
    }

    let delta = b.pos - a.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return None;
    }

    let normal = delta / distance;
    Some(Contact {
        normal,
        tangent: normal.perp(),
        distance,
        overlap: (reach - distance).abs(),
    })
}

/// Separate two balls and exchange momentum along the contact normal.
///
/// Radius stands in for mass. Tangential velocity passes through unchanged.
pub fn resolve_pair(a: &mut Body, b: &mut Body, contact: &Contact, restitution: f32) {
    let Contact {
        normal: n,
        tangent: t,
        overlap,
        ..
    } = *contact;

    let push = n * (overlap / 2.0);
    a.pos -= push;
    b.pos += push;

    let a_tan = a.vel.dot(t);
    let b_tan = b.vel.dot(t);
    let a_norm = a.vel.dot(n);
    let b_norm = b.vel.dot(n);

    let (a_norm, b_norm) = exchange_normal(a_norm, b_norm, a.mass(), b.mass(), restitution);

    a.vel = t * a_tan + n * a_norm;
    b.vel = t * b_tan + n * b_norm;
}

/// 1-D collision along the normal with coefficient of restitution `e`
#[inline]
pub fn exchange_normal(v1: f32, v2: f32, m1: f32, m2: f32, e: f32) -> (f32, f32) {
    let relative = v2 - v1;
    let total = m1 + m2;
    (
        v1 + (1.0 + e) * m2 / total * relative,
        v2 - (1.0 + e) * m1 / total * relative,
    )
}

/// Resolve every touching pair; returns how many contacts were handled
pub fn resolve_collisions(world: &mut World) -> usize {
    let restitution = world.physics.restitution;
    let bodies = &mut world.bodies;
    let mut handled = 0;

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Some(contact) = contact(a, b) {
                log::trace!(
                    "contact {}<->{} overlap {:.2}",
                    a.id,
                    b.id,
                    contact.overlap
                );
                resolve_pair(a, b, &contact, restitution);
                handled += 1;
            }
        }
    }

    handled
}
