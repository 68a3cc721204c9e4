//! Bouncy Balls - a 2D physics sandbox
//!
//! Core modules:
//! - `sim`: Physics and pointer interaction (integration, walls, collisions, trails)
//! - `renderer`: Read-only render snapshots for an external drawing backend
//! - `platform`: Tick pacing for the host loop
//! - `settings`: Startup configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, Settings};

/// Default simulation constants
///
/// Velocities are in pixels per tick and gravity in pixels per tick², since the
/// simulation advances in fixed ticks rather than by measured elapsed time.
pub mod consts {
    /// World bounds
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied while airborne
    pub const GRAVITY: f32 = 0.2;
    /// Vertical speed kept after a floor/ceiling bounce
    pub const FLOOR_DAMPING: f32 = 0.8;
    /// Horizontal speed kept after a wall bounce
    pub const WALL_DAMPING: f32 = 0.95;
    /// Horizontal speed kept per tick of floor/ceiling contact
    pub const BOUNCE_FRICTION: f32 = 0.996;
    /// Rebound speeds at or below these settle to rest
    pub const MIN_REST_SPEED_Y: f32 = 1.0;
    pub const MIN_REST_SPEED_X: f32 = 1.0;
    /// Coefficient of restitution for ball-ball contacts
    pub const RESTITUTION: f32 = 0.8;

    /// Trail history length (points)
    pub const TRAIL_CAPACITY: usize = 30;
    /// Trail segments averaged when a ball is released
    pub const TRAJECTORY_WINDOW: usize = 2;
    /// Base weight (and per-step increment) of the release average
    pub const TRAJECTORY_WEIGHT: f32 = 200.0;
    /// Scale on the release velocity so throws don't over-launch
    pub const POINTER_SENSITIVITY: f32 = 0.4;

    pub const BODY_COUNT: usize = 5;
    pub const BODY_RADIUS: f32 = 50.0;

    /// Target ticks per second
    pub const TICK_RATE: u32 = 144;
}

/// Squared distance check shared by hit testing and collision detection
#[inline]
pub fn within_radius(a: glam::Vec2, b: glam::Vec2, radius: f32) -> bool {
    a.distance_squared(b) <= radius * radius
}
