//! Authority↔observer state sync
//!
//! The snapshot is the minimal wire view of an actor: pose, extent, speed,
//! identity and the active attraction vector. Transients (turn resistance,
//! the pending attraction buffer, appearance) never cross the wire. Import
//! is a hard apply with no interpolation, and must not interleave with an
//! in-progress tick on the same actor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Actor, ActorKind};
use crate::error::SimError;

/// Explicit `{x, y}` wire encoding (glam's default is a `[x, y]` tuple)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Serialized actor state. Exact field set, no version tag; a consumer must
/// tolerate this shape only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub pos: Point,
    pub size: Point,
    /// Heading in radians
    pub ang: f32,
    pub vel: f32,
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActorKind,
    pub attraction: Point,
}

impl ActorSnapshot {
    /// Parse a wire snapshot; any missing field or shape mismatch is a
    /// `MalformedState`
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::MalformedState(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string(self).map_err(|e| SimError::MalformedState(e.to_string()))
    }
}

impl Actor {
    /// Snapshot the syncable fields
    pub fn export_state(&self) -> ActorSnapshot {
        ActorSnapshot {
            pos: self.pos.into(),
            size: self.size.into(),
            ang: self.ang,
            vel: self.vel,
            id: self.id,
            kind: self.kind.clone(),
            attraction: self.attraction.active().into(),
        }
    }

    /// Overwrite the syncable fields verbatim from a snapshot
    pub fn import_state(&mut self, snapshot: &ActorSnapshot) {
        self.pos = snapshot.pos.into();
        self.size = snapshot.size.into();
        self.ang = snapshot.ang;
        self.vel = snapshot.vel;
        self.id = snapshot.id;
        self.kind = snapshot.kind.clone();
        self.attraction.set_active(snapshot.attraction.into());
        log::trace!("actor {} adopted snapshot", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::state::ActorParams;
    use proptest::prelude::*;

    fn sample_actor() -> Actor {
        let mut actor = Actor::new(
            ActorParams {
                id: 7,
                kind: ActorKind::Buoy,
                pos: Vec2::new(12.5, -3.0),
                size: Vec2::new(8.0, 6.0),
                ang: 1.25,
                vel: 2.0,
                ..Default::default()
            },
            &SimConfig::default(),
        )
        .unwrap();
        actor.attraction.add(Vec2::new(0.5, -0.25));
        actor.attraction.commit();
        actor
    }

    #[test]
    fn test_export_import_roundtrip() {
        let source = sample_actor();
        let snap = source.export_state();

        let mut target = Actor::new(ActorParams::default(), &SimConfig::default()).unwrap();
        target.import_state(&snap);

        assert_eq!(target.pos, source.pos);
        assert_eq!(target.size, source.size);
        assert_eq!(target.ang, source.ang);
        assert_eq!(target.vel, source.vel);
        assert_eq!(target.id, source.id);
        assert_eq!(target.kind, source.kind);
        assert_eq!(target.attraction.active(), source.attraction.active());
    }

    #[test]
    fn test_import_skips_transients() {
        let snap = sample_actor().export_state();
        let mut target = Actor::new(ActorParams::default(), &SimConfig::default()).unwrap();
        target.turn_resistance = 5.0;
        target.attraction.add(Vec2::new(9.0, 9.0));

        target.import_state(&snap);
        // Transients untouched by a snapshot apply
        assert_eq!(target.turn_resistance, 5.0);
        assert_eq!(target.attraction.pending(), Vec2::new(9.0, 9.0));
    }

    #[test]
    fn test_wire_shape() {
        let json = sample_actor().export_state().to_json().unwrap();
        assert!(json.contains("\"pos\":{\"x\":"));
        assert!(json.contains("\"type\":"));
        // Transient fields never serialize
        assert!(!json.contains("turn_resistance"));
        assert!(!json.contains("pending"));
    }

    #[test]
    fn test_malformed_snapshot_rejected() {
        // vel missing
        let json = r#"{"pos":{"x":1.0,"y":2.0},"size":{"x":10.0,"y":10.0},
                       "ang":0.0,"id":1,"type":"ship","attraction":{"x":0.0,"y":0.0}}"#;
        assert!(matches!(
            ActorSnapshot::from_json(json),
            Err(SimError::MalformedState(_))
        ));
        assert!(ActorSnapshot::from_json("not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let snap = sample_actor().export_state();
        let back = ActorSnapshot::from_json(&snap.to_json().unwrap()).unwrap();
        assert_eq!(back, snap);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_preserves_exported_fields(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            ang in -3.14f32..3.14,
            vel in 0.0f32..50.0,
            ax in -10.0f32..10.0,
            ay in -10.0f32..10.0,
        ) {
            let mut source = Actor::new(
                ActorParams {
                    pos: Vec2::new(x, y),
                    ang,
                    vel,
                    vel_cap: 100.0,
                    ..Default::default()
                },
                &SimConfig::default(),
            )
            .unwrap();
            source.attraction.add(Vec2::new(ax, ay));
            source.attraction.commit();

            let json = source.export_state().to_json().unwrap();
            let snap = ActorSnapshot::from_json(&json).unwrap();
            let mut target =
                Actor::new(ActorParams::default(), &SimConfig::default()).unwrap();
            target.import_state(&snap);

            prop_assert!((target.pos.x - source.pos.x).abs() < 1e-4);
            prop_assert!((target.pos.y - source.pos.y).abs() < 1e-4);
            prop_assert!((target.ang - source.ang).abs() < 1e-4);
            prop_assert!((target.vel - source.vel).abs() < 1e-4);
            prop_assert!((target.attraction.active().x - source.attraction.active().x).abs() < 1e-4);
        }
    }
}
