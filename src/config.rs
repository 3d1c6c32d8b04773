//! Simulation tuning configuration
//!
//! Passed explicitly to actor construction; there is no global options
//! object. `timestep` scales every per-tick rate once, at construction.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Simulation-wide tuning values
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// Scales velocity, acceleration, velocity cap, brake speed and all
    /// per-tick rotations/impulses to the fixed simulation rate
    pub timestep: f32,
    /// Scales the throttle-response denominator in `boost()`
    pub vel_capper: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0,
            vel_capper: 1.0,
        }
    }
}

impl SimConfig {
    /// Check the config is usable before handing it to actor construction
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "timestep must be finite and positive, got {}",
                self.timestep
            )));
        }
        if !self.vel_capper.is_finite() || self.vel_capper < 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "vel_capper must be finite and non-negative, got {}",
                self.vel_capper
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_timestep() {
        let cfg = SimConfig {
            timestep: 0.0,
            vel_capper: 1.0,
        };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig {
            timestep: f32::NAN,
            vel_capper: 1.0,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let cfg = SimConfig {
            timestep: 0.5,
            vel_capper: 2.0,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert!((back.timestep - cfg.timestep).abs() < 1e-6);
        assert!((back.vel_capper - cfg.vel_capper).abs() < 1e-6);
    }
}
