//! World state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::pointer::FlingParams;
use super::trail::Trail;
use crate::settings::Settings;

/// Packed 0xRRGGBBAA color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyColor(pub u32);

impl BodyColor {
    pub const RED: Self = Self(0xFF0000FF);
    pub const GREEN: Self = Self(0x00FF00FF);
    pub const BLUE: Self = Self(0x0000FFFF);
    pub const ORANGE: Self = Self(0xFFA500FF);
    pub const PURPLE: Self = Self(0x800080FF);
    pub const LIME: Self = Self(0x00FF00FF);
    pub const FUCHSIA: Self = Self(0xFF00FFFF);
    pub const MAROON: Self = Self(0x800000FF);
    pub const NAVY: Self = Self(0x000080FF);
    pub const YELLOW: Self = Self(0xFFFF00FF);
    pub const AQUA: Self = Self(0x00FFFFFF);
    pub const WHITE: Self = Self(0xFFFFFFFF);

    /// Palette new bodies draw from
    pub const PALETTE: [Self; 12] = [
        Self::RED,
        Self::GREEN,
        Self::BLUE,
        Self::ORANGE,
        Self::PURPLE,
        Self::LIME,
        Self::FUCHSIA,
        Self::MAROON,
        Self::NAVY,
        Self::YELLOW,
        Self::AQUA,
        Self::WHITE,
    ];

    /// Unpack to normalized RGBA
    pub fn to_rgba(self) -> [f32; 4] {
        let c = self.0;
        [
            ((c >> 24) & 0xFF) as f32 / 255.0,
            ((c >> 16) & 0xFF) as f32 / 255.0,
            ((c >> 8) & 0xFF) as f32 / 255.0,
            (c & 0xFF) as f32 / 255.0,
        ]
    }
}

/// A simulated ball
#[derive(Debug, Clone)]
pub struct Body {
    pub id: u32,
    /// Live position; the trail only stores copies
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    pub color: BodyColor,
    pub trail: Trail,
}

impl Body {
    /// Create a body at rest. Panics on a non-positive radius.
    pub fn new(id: u32, pos: Vec2, radius: f32, color: BodyColor, trail_capacity: usize) -> Self {
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            trail: Trail::new(pos, trail_capacity),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Collision mass; the radius stands in for it
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius
    }

    /// Circle power of `p`: negative inside, zero on the rim, positive outside
    #[inline]
    pub fn power(&self, p: Vec2) -> f32 {
        self.pos.distance_squared(p) - self.radius * self.radius
    }

    /// Record current position to trail (once per tick)
    pub fn record_trail(&mut self) {
        self.trail.push(self.pos);
    }
}

/// Physics coefficients copied out of [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    pub floor_damping: f32,
    pub wall_damping: f32,
    pub bounce_friction: f32,
    pub min_rest_speed_y: f32,
    pub min_rest_speed_x: f32,
    pub restitution: f32,
}

impl From<&Settings> for Physics {
    fn from(s: &Settings) -> Self {
        Self {
            gravity: s.gravity,
            floor_damping: s.floor_damping,
            wall_damping: s.wall_damping,
            bounce_friction: s.bounce_friction,
            min_rest_speed_y: s.min_rest_speed_y,
            min_rest_speed_x: s.min_rest_speed_x,
            restitution: s.restitution,
        }
    }
}

/// Window-sized play area; origin top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate a body of `radius` rests at on the floor
    #[inline]
    pub fn floor(&self, radius: f32) -> f32 {
        self.height - radius
    }

    /// X coordinate a body of `radius` touches the right wall at
    #[inline]
    pub fn right(&self, radius: f32) -> f32 {
        self.width - radius
    }
}

/// All bodies plus the constants that act on them
#[derive(Debug, Clone)]
pub struct World {
    /// Bodies in stable iteration order (collision pairs are ascending indices)
    pub bodies: Vec<Body>,
    pub bounds: Bounds,
    pub physics: Physics,
    /// Release-velocity estimation for pointer throws
    pub fling: FlingParams,
    pub trail_capacity: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl World {
    /// Empty world with the given settings
    pub fn empty(settings: &Settings) -> Self {
        Self {
            bodies: Vec::new(),
            bounds: Bounds::new(settings.width, settings.height),
            physics: Physics::from(settings),
            fling: FlingParams::from(settings),
            trail_capacity: settings.trail_capacity,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Spawn `settings.body_count` bodies evenly spaced across the width at
    /// mid-height, each with a palette color drawn from `seed`
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let mut world = Self::empty(settings);
        let mut rng = Pcg32::seed_from_u64(seed);

        let n = settings.body_count;
        let spacing = settings.width / (n + 1) as f32;
        for i in 0..n {
            let pos = Vec2::new((i + 1) as f32 * spacing, settings.height / 2.0);
            let color = BodyColor::PALETTE[rng.random_range(0..BodyColor::PALETTE.len())];
            world.spawn(pos, settings.body_radius, color);
        }

        log::info!(
            "World {}x{} with {} bodies (seed {seed})",
            world.bounds.width,
            world.bounds.height,
            world.bodies.len()
        );
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a body at rest and return its index
    pub fn spawn(&mut self, pos: Vec2, radius: f32, color: BodyColor) -> usize {
        let id = self.next_entity_id();
        self.bodies
            .push(Body::new(id, pos, radius, color, self.trail_capacity));
        self.bodies.len() - 1
    }

    /// Apply new bounds; bodies outside are pulled back on the next boundary pass
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("Ignoring resize to {width}x{height}");
            return;
        }
        log::info!("World resized to {width}x{height}");
        self.bounds = Bounds::new(width, height);
    }

    /// Index of the first body containing `p`
    pub fn body_at(&self, p: Vec2) -> Option<usize> {
        self.bodies.iter().position(|b| b.power(p) < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_layout() {
        let settings = Settings::default();
        let world = World::new(&settings, 7);
        assert_eq!(world.bodies.len(), 5);
        for (i, body) in world.bodies.iter().enumerate() {
            assert_eq!(body.pos.x, (i + 1) as f32 * 150.0);
            assert_eq!(body.pos.y, 300.0);
            assert_eq!(body.vel, Vec2::ZERO);
            assert_eq!(body.trail.len(), 1);
            assert_eq!(body.trail.top(), body.pos);
            assert!(BodyColor::PALETTE.contains(&body.color));
        }
        let ids: Vec<u32> = world.bodies.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_colors_are_seeded() {
        let settings = Settings::default();
        let a: Vec<_> = World::new(&settings, 42).bodies.iter().map(|b| b.color).collect();
        let b: Vec<_> = World::new(&settings, 42).bodies.iter().map(|b| b.color).collect();
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_panics() {
        Body::new(1, Vec2::ZERO, 0.0, BodyColor::WHITE, 30);
    }

    #[test]
    fn test_body_at_uses_strict_interior() {
        let mut world = World::empty(&Settings::default());
        world.spawn(Vec2::new(100.0, 100.0), 50.0, BodyColor::RED);
        world.spawn(Vec2::new(140.0, 100.0), 50.0, BodyColor::BLUE);

        // Overlap region: first in iteration order wins
        assert_eq!(world.body_at(Vec2::new(120.0, 100.0)), Some(0));
        assert_eq!(world.body_at(Vec2::new(185.0, 100.0)), Some(1));
        // Exactly on the rim is not a hit
        assert_eq!(world.body_at(Vec2::new(190.0, 100.0)), None);
    }

    #[test]
    fn test_color_unpack() {
        assert_eq!(BodyColor::ORANGE.to_rgba(), [1.0, 165.0 / 255.0, 0.0, 1.0]);
        assert_eq!(BodyColor::RED.to_rgba(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_resize_rejects_degenerate() {
        let mut world = World::empty(&Settings::default());
        world.resize(0.0, 100.0);
        assert_eq!(world.bounds, Bounds::new(900.0, 600.0));
        world.resize(1920.0, 1080.0);
        assert_eq!(world.bounds, Bounds::new(1920.0, 1080.0));
    }
}
