//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Index of a qubit inside a walk register.
/// Qubit `i` is also vertex `i` of the walk graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl QubitId {
    /// Position of this qubit in the register.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Failures surfaced by graph construction, walk setup and circuit execution.
///
/// Nothing in the crate recovers from these locally; every variant reaches the
/// caller unchanged so the outer layer can decide how to report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// The graph-type token is not one of `cycle`, `line` or `complete`.
    #[error("Unsupported topology '{0}': choose 'cycle', 'line', or 'complete'")]
    UnsupportedTopology(String),

    /// Qubit count, step count or shot count outside the supported domain.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// InvalidParameter failure message
        message: String,
    },

    /// The simulation backend could not execute the operator sequence.
    #[error("Backend execution failed: {message}")]
    BackendExecution {
        /// BackendExecution failure message
        message: String,
    },
}

impl WalkError {
    pub(crate) fn invalid_parameter(message: impl Into<String>) -> Self {
        WalkError::InvalidParameter { message: message.into() }
    }

    pub(crate) fn backend(message: impl Into<String>) -> Self {
        WalkError::BackendExecution { message: message.into() }
    }
}
