//! Seabound - deterministic 2D boat-actor simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, containment, integration, state sync)
//! - `config`: Simulation tuning (`SimConfig`)
//! - `error`: Domain error types
//!
//! The same tick runs on an authoritative side and a prediction side;
//! `sim::snapshot` carries state between the two.

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::SimError;

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Per-tick velocity decay factor, scaled by the timestep at construction
    pub const FRICTION: f32 = 0.01;
    /// Below this speed an actor neither decays nor advances
    pub const MIN_MOVE_SPEED: f32 = 0.1;
    /// Turn resistance applied when boundary containment fires
    pub const BOUNCE_TURN_RESISTANCE: f32 = 5.0;
    /// Speed nudge per tick while predicted out of bounds (stops actors
    /// stalling at zero velocity against a wall)
    pub const BOUNDARY_SPEED_NUDGE: f32 = 0.08;
    /// Divisor applied to velocity for the center-pull attraction impulse
    pub const CENTER_PULL_DIVISOR: f32 = 1.3;
    /// Divisor applied to turn speed in the automatic steering term
    pub const AUTO_TURN_DIVISOR: f32 = 24.0;
    /// Base multiplier of the automatic steering term
    pub const AUTO_TURN_BASE: f32 = 2.0;
    /// Default deadzone for manual/containment turn commands (radians)
    pub const TURN_DEADZONE: f32 = 0.1;
    /// Tighter deadzone used by the automatic attraction steer (radians)
    pub const AUTO_STEER_DEADZONE: f32 = 0.05;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Wrapped absolute angular distance between two angles, in [0, π]
#[inline]
pub fn angle_distance(a: f32, b: f32) -> f32 {
    normalize_angle(b - a).abs()
}

/// Shortest rotation sense from `current` toward `target`: -1.0, 0.0 or +1.0
#[inline]
pub fn closest_turn_dir(current: f32, target: f32) -> f32 {
    let delta = normalize_angle(target - current);
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Unit vector for a heading angle (heading 0 points +Y)
#[inline]
pub fn heading_vector(ang: f32) -> Vec2 {
    Vec2::new(-ang.sin(), ang.cos())
}
