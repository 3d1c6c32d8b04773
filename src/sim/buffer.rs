//! Double-buffered attraction accumulator
//!
//! Decouples "detected this tick" from "applied next tick": sources add
//! into the pending slot during a tick, and the commit at tick end swaps
//! pending into active. The one-tick lag lets each actor's containment
//! response be computed from a tick-start snapshot regardless of the order
//! actors are processed in.

use glam::Vec2;

/// Single-slot double buffer for an accumulated steering vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoubleBuffer {
    active: Vec2,
    pending: Vec2,
}

impl DoubleBuffer {
    /// Start with an active value and an empty pending slot
    pub fn new(active: Vec2) -> Self {
        Self {
            active,
            pending: Vec2::ZERO,
        }
    }

    /// Value committed at the end of the previous tick
    pub fn active(&self) -> Vec2 {
        self.active
    }

    /// Accumulated-but-not-yet-applied value
    pub fn pending(&self) -> Vec2 {
        self.pending
    }

    /// Accumulate into the pending slot; takes effect at the next commit
    pub fn add(&mut self, v: Vec2) {
        self.pending += v;
    }

    /// Promote pending to active and zero the pending slot
    pub fn commit(&mut self) {
        self.active = self.pending;
        self.pending = Vec2::ZERO;
    }

    /// Overwrite the active value directly (snapshot import)
    pub fn set_active(&mut self, v: Vec2) {
        self.active = v;
    }
}
