// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// Amplitudes of an `n`-qubit register over its `2^n` computational basis states.
///
/// Basis index `k` encodes qubit `q` in bit `q` of `k`, so the binary rendering of
/// `k` (padded to `n` digits) reads with qubit 0 as the rightmost character.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// The all-zero state `|0...0>`. Returns `None` if `2^num_qubits` overflows.
    pub(crate) fn zero_state(num_qubits: usize) -> Option<Self> {
        let dim = 1usize.checked_shl(u32::try_from(num_qubits).ok()?)?;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::one();
        Some(Self { num_qubits, amplitudes })
    }

    /// Wraps raw amplitudes. The length must be `2^num_qubits`.
    #[cfg(test)]
    pub(crate) fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(amplitudes.len(), 1 << num_qubits);
        Self { num_qubits, amplitudes }
    }

    /// Read-only view of the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states (`2^n`).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Born-rule probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Renders basis index `k` as a bitstring with qubit 0 on the right.
    pub fn bitstring(&self, k: usize) -> String {
        format!("{:0width$b}", k, width = self.num_qubits)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state() {
        let state = StateVector::zero_state(3).expect("3 qubits fit");
        assert_eq!(state.dim(), 8);
        assert_eq!(state.probabilities()[0], 1.0);
        assert!(state.probabilities()[1..].iter().all(|p| *p == 0.0));
    }

    #[test]
    fn test_bitstring_is_little_endian() {
        let state = StateVector::zero_state(3).expect("3 qubits fit");
        // index 1 sets qubit 0, which is the rightmost character
        assert_eq!(state.bitstring(1), "001");
        assert_eq!(state.bitstring(4), "100");
    }

    #[test]
    fn test_zero_state_overflow() {
        assert!(StateVector::zero_state(200).is_none());
    }
}
