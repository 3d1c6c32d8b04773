//! Arena bounds and boundary containment
//!
//! Containment predicts the position one forward-force step ahead; when the
//! prediction leaves the arena it nudges the heading away from the violated
//! edge immediately and buffers an attraction impulse toward the arena
//! center for the next tick. Edges are tested in a fixed priority order
//! (right, bottom, left, top) with only the first match correcting, so a
//! corner exit resolves a single axis.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::state::Actor;
use crate::{consts, normalize_angle};

/// Rectangular world bound, `(0,0)..size`, shared read-only by all actors
/// within a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub size: Vec2,
}

impl Arena {
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point_in_bounds(point, Vec2::ZERO, self.size)
    }
}

/// Inclusive containment test against an axis-aligned rectangle
#[inline]
pub fn point_in_bounds(point: Vec2, top_left: Vec2, bot_right: Vec2) -> bool {
    point.x >= top_left.x && point.x <= bot_right.x && point.y >= top_left.y && point.y <= bot_right.y
}

impl Actor {
    /// Steer away from the arena edge the actor is about to cross.
    ///
    /// Edge targets point back into the arena: right → +π/2, bottom → π,
    /// left → -π/2, top → 0 (heading 0 is +Y). The center-pull impulse goes
    /// into the pending attraction buffer and lands next tick; the heading
    /// nudge is immediate.
    pub fn bounce_away(&mut self, top_left: Vec2, bot_right: Vec2) {
        if point_in_bounds(self.pos + self.force(), top_left, bot_right) {
            return;
        }
        self.ang = normalize_angle(self.ang);

        let turn_cmd = if self.pos.x > bot_right.x {
            self.make_turn(FRAC_PI_2, consts::TURN_DEADZONE, 1.0)
        } else if self.pos.y > bot_right.y {
            self.make_turn(PI, consts::TURN_DEADZONE, 1.0)
        } else if self.pos.x < top_left.x {
            self.make_turn(-FRAC_PI_2, consts::TURN_DEADZONE, 1.0)
        } else if self.pos.y < top_left.y {
            self.make_turn(0.0, consts::TURN_DEADZONE, 1.0)
        } else {
            0.0
        };

        if turn_cmd != 0.0 {
            self.turn_resistance = consts::BOUNCE_TURN_RESISTANCE;
            self.ang += self.turn_speed * turn_cmd * self.timestep;

            // Center assumes a zero top-left, matching the only caller
            let center = bot_right * 0.5;
            let pull = (center - self.pos).normalize_or_zero()
                * (self.vel / consts::CENTER_PULL_DIVISOR);
            self.attraction.add(pull);

            log::debug!(
                "actor {} containment fired: pos=({:.1},{:.1}) turn={:+.1}",
                self.id,
                self.pos.x,
                self.pos.y,
                turn_cmd
            );
        }

        // Keep actors from stalling at zero velocity against a wall
        self.vel += consts::BOUNDARY_SPEED_NUDGE * self.timestep;
    }
}
