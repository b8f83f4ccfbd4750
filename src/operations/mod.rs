// src/operations/mod.rs

//! Primitive operations a walk circuit is made of.
//!
//! A walk only ever needs three gates: the superposition used to initialise the
//! register, the per-qubit coin, and the controlled flip that shifts amplitude
//! along a graph edge.

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;

/// A 2x2 single-qubit unitary.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// One step of an operator sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Hadamard on `target`, mapping `|0>` to `(|0> + |1>)/√2`.
    Superposition {
        /// The qubit put into superposition.
        target: QubitId,
    },

    /// The walk coin: a Hadamard followed by the phase rotation `diag(1, e^(iθ))`.
    ///
    /// Applied once per qubit per step, it models the "which way to move"
    /// choice independently of the graph.
    Coin {
        /// The qubit being flipped.
        target: QubitId,
        /// Phase angle in radians applied after the Hadamard.
        theta: f64,
    },

    /// Controlled-NOT: flips `target` when `control` is `|1>`.
    ControlledFlip {
        /// The qubit whose `|1>` component triggers the flip.
        control: QubitId,
        /// The qubit that gets flipped.
        target: QubitId,
    },
}

impl Operation {
    /// All qubits named by the operation.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Superposition { target } => vec![*target],
            Operation::Coin { target, .. } => vec![*target],
            Operation::ControlledFlip { control, target } => vec![*control, *target],
        }
    }

    /// Short gate label used by the circuit diagram.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Superposition { .. } => "H",
            Operation::Coin { .. } => "C",
            Operation::ControlledFlip { .. } => "X",
        }
    }

    /// The 2x2 matrix of a single-qubit operation, `None` for controlled ones.
    pub fn single_qubit_matrix(&self) -> Option<Matrix2> {
        match self {
            Operation::Superposition { .. } => Some(hadamard_matrix()),
            Operation::Coin { theta, .. } => Some(coin_matrix(*theta)),
            Operation::ControlledFlip { .. } => None,
        }
    }
}

/// `H = 1/√2 [[1, 1], [1, -1]]`
pub fn hadamard_matrix() -> Matrix2 {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// `P(θ) = diag(1, e^(iθ))`
pub fn phase_matrix(theta: f64) -> Matrix2 {
    [
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, theta)],
    ]
}

/// `P(θ) · H`, the coin applied in a single pass.
pub fn coin_matrix(theta: f64) -> Matrix2 {
    multiply(&phase_matrix(theta), &hadamard_matrix())
}

fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[Complex::zero(); 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    const TOL: f64 = 1e-12;

    fn approx(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a - b).norm() < TOL
    }

    #[test]
    fn test_coin_is_phase_after_hadamard() {
        let m = coin_matrix(FRAC_PI_4);
        let s = FRAC_1_SQRT_2;
        let e = Complex::from_polar(1.0, FRAC_PI_4);
        assert!(approx(m[0][0], Complex::new(s, 0.0)));
        assert!(approx(m[0][1], Complex::new(s, 0.0)));
        assert!(approx(m[1][0], e * s));
        assert!(approx(m[1][1], -e * s));
    }

    #[test]
    fn test_coin_with_zero_phase_is_hadamard() {
        let m = coin_matrix(0.0);
        let h = hadamard_matrix();
        for r in 0..2 {
            for c in 0..2 {
                assert!(approx(m[r][c], h[r][c]));
            }
        }
    }

    #[test]
    fn test_involved_qubits() {
        let op = Operation::ControlledFlip { control: QubitId(2), target: QubitId(0) };
        assert_eq!(op.involved_qubits(), vec![QubitId(2), QubitId(0)]);
        assert!(op.single_qubit_matrix().is_none());
    }
}
