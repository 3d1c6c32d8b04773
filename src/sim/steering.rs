//! Steering and throttle control laws
//!
//! `make_turn` is a bang-bang controller: inside the deadzone it emits no
//! correction at all, outside it the magnitude is caller-supplied rather
//! than proportional to the angular error. The throttle pair gives an
//! asymptotic top-speed feel on boost and compounding decay on brake.

use crate::{angle_distance, closest_turn_dir};

use super::state::Actor;

impl Actor {
    /// Signed turn command toward `target_ang`.
    ///
    /// Returns 0 when the wrapped angular distance to the target is within
    /// `deadzone` (prevents oscillation near the target), otherwise
    /// `±magnitude` in the shortest-rotation sense.
    pub fn make_turn(&self, target_ang: f32, deadzone: f32, magnitude: f32) -> f32 {
        let mut dir = 0.0;
        if angle_distance(self.ang, target_ang) > deadzone {
            dir = closest_turn_dir(self.ang, target_ang);
        }
        dir * magnitude
    }

    /// Accelerate. The denominator saturates at 1 near rest, so the
    /// increment starts close to `accel` and shrinks roughly as 1/vel.
    pub fn boost(&mut self) {
        self.vel += self.accel / (self.vel * self.vel_capper).max(1.0);
    }

    /// Exponential speed decay; repeated calls compound multiplicatively
    pub fn brake(&mut self) {
        self.vel *= 1.0 - self.brake_speed;
    }

    /// Manual turn: -1 left, +1 right. A boundary event in the same tick
    /// window raises `turn_resistance` and dulls the response.
    pub fn turn(&mut self, dir: f32) {
        self.ang += dir * (self.turn_speed / self.turn_resistance.max(1.0));
    }
}
