// src/validation/mod.rs

//! Sanity checks on statevectors and on sampled counts.

use crate::core::{StateVector, WalkError};
use crate::simulation::ResultCounts;

/// Default tolerance on `| Σ|c_k|² - 1 |`.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the probabilities of `state` sum to 1 within `tolerance`.
///
/// # Errors
/// `WalkError::BackendExecution` carrying the measured norm when the check fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), WalkError> {
    let tol = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > tol || !norm_sq.is_finite() {
        return Err(WalkError::backend(format!(
            "state vector norm squared is {:.12}, expected 1 within {:e}",
            norm_sq, tol
        )));
    }
    Ok(())
}

/// Checks that sampled counts are well formed for an `num_qubits`-qubit register:
/// every key is exactly `num_qubits` characters of `0`/`1` and the counts add up
/// to `shots`.
///
/// # Errors
/// `WalkError::BackendExecution` describing the first violation found.
pub fn validate_counts(counts: &ResultCounts, num_qubits: usize, shots: usize) -> Result<(), WalkError> {
    for bitstring in counts.bitstrings() {
        if bitstring.len() != num_qubits || !bitstring.chars().all(|c| c == '0' || c == '1') {
            return Err(WalkError::backend(format!(
                "outcome '{}' is not a {}-bit string",
                bitstring, num_qubits
            )));
        }
    }
    if counts.total() != shots {
        return Err(WalkError::backend(format!(
            "counts sum to {}, expected {} shots",
            counts.total(),
            shots
        )));
    }
    Ok(())
}
