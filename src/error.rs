//! Domain error types
//!
//! Per-tick integration never fails; errors surface only at construction
//! and at the snapshot boundary.

use thiserror::Error;

/// Errors raised by actor construction, configuration, and state sync
#[derive(Debug, Error)]
pub enum SimError {
    /// A per-actor tunable was negative or non-finite
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// The simulation configuration is unusable (e.g. non-positive weight
    /// or timestep)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An imported snapshot was missing fields or otherwise unreadable
    #[error("malformed state snapshot: {0}")]
    MalformedState(String),
}
