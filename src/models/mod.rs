//! Rostering domain models.
//!
//! Provides the core data types for representing rostering problems and
//! their solutions. The input side (`Scenario`, `PreferenceMatrix`) is owned
//! by the caller and passed by reference into the CP formulation; the output
//! side (`Roster`, `Assignment`) is produced by solution decoding and is
//! never mutated afterwards.

mod roster;
mod scenario;

pub use roster::{Assignment, Roster};
pub use scenario::{PreferenceMatrix, Scenario};
