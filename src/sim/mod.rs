//! Physics and interaction core
//!
//! Everything here runs on one thread, owned by the host loop:
//! - One fixed step per tick, no delta time
//! - Stable iteration order (body index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod pointer;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{Contact, contact, resolve_collisions, resolve_pair};
pub use motion::{integrate, resolve_boundaries};
pub use pointer::{FlingParams, PointerSession, fling_velocity};
pub use state::{Body, BodyColor, Bounds, Physics, World};
pub use tick::{InputEvent, TickReport, TickStatus, tick};
pub use trail::Trail;
