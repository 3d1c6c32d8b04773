//! Fixed timestep integration
//!
//! One tick for an actor is `update` (decay, containment, attraction
//! steering, advance) followed by `post_update` (commit the pending
//! attraction, clear turn resistance). The two phases must not interleave
//! for a single actor; across actors no ordering is required, which is why
//! containment writes into the pending buffer instead of steering directly.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::bounds::Arena;
use super::state::{Actor, ActorParams};
use crate::config::SimConfig;
use crate::error::SimError;
use crate::{consts, normalize_angle};

impl Actor {
    /// Advance one simulation tick against the shared arena bound
    pub fn update(&mut self, arena: &Arena) {
        self.ang = normalize_angle(self.ang);

        if self.vel > consts::MIN_MOVE_SPEED {
            self.vel = self.vel.min(self.vel_cap);
            self.vel *= 1.0 - self.friction;
            if self.turn_resistance > 1.0 {
                log::trace!(
                    "actor {} steering under resistance {}",
                    self.id,
                    self.turn_resistance
                );
            }
        }

        if self.obeys_bounds {
            self.bounce_away(Vec2::ZERO, arena.size);
        }

        // How strongly the current heading disagrees with the attraction
        // direction, damped by any active turn resistance
        let attraction = self.attraction.active();
        let extra_turn = self.force().normalize_or_zero().dot(attraction.perp()).abs()
            / self.turn_resistance.max(1.0);

        let target = attraction.y.atan2(attraction.x) - FRAC_PI_2;
        self.ang += self.make_turn(target, consts::AUTO_STEER_DEADZONE, attraction.length())
            * (self.turn_speed / consts::AUTO_TURN_DIVISOR)
            * (extra_turn + consts::AUTO_TURN_BASE);

        // Attraction is a direct positional nudge, not velocity-integrated
        self.pos += attraction;

        if self.vel > consts::MIN_MOVE_SPEED {
            self.pos += self.force();
        }
    }

    /// End-of-tick commit: pending attraction becomes active, resistance
    /// clears. Must run exactly once per tick, strictly after `update`.
    pub fn post_update(&mut self) {
        self.turn_resistance = 0.0;
        self.attraction.commit();
    }
}

/// Owns the actors and the arena; drives the two-phase tick in id order
#[derive(Debug, Clone)]
pub struct Fleet {
    pub arena: Arena,
    actors: Vec<Actor>,
    next_id: u32,
}

impl Fleet {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            actors: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a fresh actor ID
    fn next_actor_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Construct and register an actor; the ID in `params` is replaced by a
    /// fleet-allocated one, returned on success
    pub fn spawn(&mut self, mut params: ActorParams, config: &SimConfig) -> Result<u32, SimError> {
        params.id = self.next_actor_id();
        let actor = Actor::new(params, config)?;
        let id = actor.id;
        self.actors.push(actor);
        Ok(id)
    }

    pub fn actor(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn actor_mut(&mut self, id: u32) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    /// Actors in stable id order (spawn order)
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Run one tick: for every actor, `update` then `post_update`. The
    /// per-actor commit runs as soon as that actor's update completes; no
    /// cross-actor barrier is needed because detection only ever writes
    /// into pending buffers.
    pub fn step(&mut self) {
        for actor in &mut self.actors {
            actor.update(&self.arena);
            actor.post_update();
        }
    }

    /// Every touching pair of actor ids, lower id first
    pub fn contacts(&self) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        for (i, a) in self.actors.iter().enumerate() {
            for b in &self.actors[i + 1..] {
                if a.is_touching(b) {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }
}
