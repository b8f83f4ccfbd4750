// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

pub use error::{QubitId, WalkError};
pub use state::StateVector;

pub mod constants;
pub use constants::walk_constants::{COIN_PHASE, DEFAULT_MAX_QUBITS, DEFAULT_SHOTS};
