//! Deterministic simulation module
//!
//! All actor motion logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by actor ID)
//! - No rendering or platform dependencies
//!
//! The same code runs on the authoritative side and the prediction side;
//! `snapshot` is the only sanctioned way state crosses between the two.

pub mod bounds;
pub mod buffer;
pub mod snapshot;
pub mod state;
pub mod steering;
pub mod tick;

pub use bounds::Arena;
pub use buffer::DoubleBuffer;
pub use snapshot::ActorSnapshot;
pub use state::{Actor, ActorKind, ActorParams, Appearance};
pub use tick::Fleet;
