//! Actor state and geometry
//!
//! An actor is an autonomous boat/ship with a scalar forward speed along a
//! heading, a double-buffered attraction vector steering it, and a set of
//! per-actor tunables scaled once to the simulation timestep at
//! construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::buffer::DoubleBuffer;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::{consts, heading_vector};

/// Classification tag, carried through the sync snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Ship,
    Buoy,
    Debris,
    /// Forward-compatible escape hatch for kinds this build doesn't know
    Other(String),
}

/// How an external renderer should draw the actor.
/// Never serialized into the sync snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    /// Flat-color filled disc, radius = average semi-extent
    ColorDisc { color: u32 },
    /// Sprite drawn centered and rotated by `ang + 90°` at the actor's size
    Sprite { handle: String },
}

/// Unscaled construction parameters for an actor
#[derive(Debug, Clone)]
pub struct ActorParams {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    /// Footprint extent (width, height)
    pub size: Vec2,
    /// Heading in radians
    pub ang: f32,
    /// Initial forward speed, pre-timestep units
    pub vel: f32,
    pub accel: f32,
    pub vel_cap: f32,
    pub turn_speed: f32,
    pub brake_speed: f32,
    /// Density constant; mass = size.x * size.y * weight
    pub weight: f32,
    pub obeys_bounds: bool,
    pub appearance: Appearance,
}

impl Default for ActorParams {
    fn default() -> Self {
        Self {
            id: 0,
            kind: ActorKind::Ship,
            pos: Vec2::ZERO,
            size: Vec2::new(10.0, 10.0),
            ang: 0.0,
            vel: 0.0,
            accel: 0.1,
            vel_cap: 3.0,
            turn_speed: 0.05,
            brake_speed: 0.05,
            weight: 1.0,
            obeys_bounds: true,
            appearance: Appearance::ColorDisc { color: 0x2266aa },
        }
    }
}

/// One simulated actor. Mutated exclusively by the owning tick driver.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Heading in radians, normalized to [-π, π) each tick
    pub ang: f32,
    /// Scalar forward speed, timestep-scaled units
    pub vel: f32,
    /// Hard speed clamp, timestep-scaled
    pub vel_cap: f32,
    /// Boost increment, timestep-scaled
    pub accel: f32,
    /// Brake decay factor, timestep-scaled
    pub brake_speed: f32,
    /// Base turn rate, NOT pre-scaled (scaled per use)
    pub turn_speed: f32,
    /// Per-tick velocity decay, fixed at construction
    pub friction: f32,
    pub weight: f32,
    /// Active + pending steering-target vector
    pub attraction: DoubleBuffer,
    /// Transient steering damper, raised by containment, cleared at commit
    pub turn_resistance: f32,
    pub obeys_bounds: bool,
    pub appearance: Appearance,
    /// Timestep captured at construction, for per-use rate scaling
    pub(crate) timestep: f32,
    /// Throttle-response denominator scale, consumed live by `boost()`
    pub(crate) vel_capper: f32,
}

fn check_param(name: &'static str, value: f32) -> Result<(), SimError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::InvalidParameter { name, value });
    }
    Ok(())
}

impl Actor {
    /// Build an actor, scaling the rate tunables by the configured timestep.
    ///
    /// Fails fast on non-finite or negative tunables and on a non-positive
    /// weight, rather than letting NaNs propagate through integration.
    pub fn new(params: ActorParams, config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        if !params.weight.is_finite() || params.weight <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "weight must be finite and positive, got {}",
                params.weight
            )));
        }
        check_param("vel", params.vel)?;
        check_param("accel", params.accel)?;
        check_param("vel_cap", params.vel_cap)?;
        check_param("turn_speed", params.turn_speed)?;
        check_param("brake_speed", params.brake_speed)?;

        let ts = config.timestep;
        Ok(Self {
            id: params.id,
            kind: params.kind,
            pos: params.pos,
            size: params.size,
            ang: params.ang,
            vel: params.vel * ts,
            vel_cap: params.vel_cap * ts,
            accel: params.accel * ts,
            brake_speed: params.brake_speed * ts,
            turn_speed: params.turn_speed,
            friction: consts::FRICTION * ts,
            weight: params.weight,
            attraction: DoubleBuffer::new(Vec2::ZERO),
            turn_resistance: 0.0,
            obeys_bounds: params.obeys_bounds,
            appearance: params.appearance,
            timestep: ts,
            vel_capper: config.vel_capper,
        })
    }

    /// Circular collision radius: average semi-extent of the footprint
    pub fn radius(&self) -> f32 {
        (self.size.x + self.size.y) / 4.0
    }

    /// Nose reference point, `radius` ahead of center along the heading
    pub fn head_vector(&self) -> Vec2 {
        self.pos + heading_vector(self.ang) * self.radius()
    }

    /// Forward force: heading direction scaled by current speed
    pub fn force(&self) -> Vec2 {
        heading_vector(self.ang) * self.vel
    }

    /// Derived mass: footprint area times density
    pub fn mass(&self) -> f32 {
        self.size.x * self.size.y * self.weight
    }

    /// Re-derive a square footprint for the given mass at constant density.
    /// `weight > 0` is guaranteed by construction.
    pub fn set_mass(&mut self, mass: f32) {
        let side = (mass / self.weight).sqrt();
        self.size = Vec2::new(side, side);
    }

    /// Proximity test against another actor's snapshot; squared distances,
    /// no response
    pub fn is_touching(&self, other: &Actor) -> bool {
        let reach = self.radius() + other.radius();
        self.pos.distance_squared(other.pos) < reach * reach
    }
}
