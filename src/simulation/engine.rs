// src/simulation/engine.rs
use crate::core::{QubitId, StateVector, WalkError};
use crate::operations::{Matrix2, Operation};
use crate::validation::check_normalization;
use log::{trace, warn};
use rand::{Rng, RngExt};
use std::collections::BTreeMap;

/// Probabilities at or below this are treated as impossible outcomes.
const PROBABILITY_FLOOR: f64 = 1e-12;

/// Dense statevector evolution for a single circuit execution.
///
/// An engine is created per execution and dropped when it finishes, so no
/// amplitudes survive between runs.
pub(crate) struct SimulationEngine {
    state: StateVector,
}

impl SimulationEngine {
    /// Starts the register in `|0...0>`.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, WalkError> {
        if num_qubits == 0 {
            return Err(WalkError::backend("cannot simulate a register of zero qubits"));
        }
        let state = StateVector::zero_state(num_qubits).ok_or_else(|| {
            WalkError::backend(format!(
                "{} qubits overflow the addressable state vector",
                num_qubits
            ))
        })?;
        Ok(Self { state })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), WalkError> {
        if state.dim() != self.state.dim() {
            return Err(WalkError::backend(format!(
                "cannot set state: dimension {} does not match engine dimension {}",
                state.dim(),
                self.state.dim()
            )));
        }
        self.state = state;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    /// Applies one operation to the register.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), WalkError> {
        trace!("applying {:?}", op);
        match op {
            Operation::Superposition { target } | Operation::Coin { target, .. } => {
                let target_idx = self.qubit_index(target)?;
                let matrix = op
                    .single_qubit_matrix()
                    .ok_or_else(|| WalkError::backend(format!("{:?} has no single-qubit matrix", op)))?;
                self.apply_single_qubit_gate(target_idx, &matrix);
            }
            Operation::ControlledFlip { control, target } => {
                let control_idx = self.qubit_index(control)?;
                let target_idx = self.qubit_index(target)?;
                if control_idx == target_idx {
                    return Err(WalkError::backend(format!(
                        "control and target of a controlled flip are both {}",
                        control
                    )));
                }
                self.apply_controlled_flip(control_idx, target_idx);
            }
        }
        Ok(())
    }

    /// Draws `shots` independent measurements of the whole register and tallies them.
    pub(crate) fn sample<R: Rng + ?Sized>(
        &self,
        shots: usize,
        rng: &mut R,
    ) -> Result<BTreeMap<String, usize>, WalkError> {
        check_normalization(&self.state, None)?;

        let probabilities = self.state.probabilities();
        let mut cumulative = Vec::with_capacity(probabilities.len());
        let mut running = 0.0;
        for p in &probabilities {
            running += p;
            cumulative.push(running);
        }
        let last = cumulative.len() - 1;
        if let Some(residue) = mass_residue(running) {
            warn!(
                "probability mass sums to 1 {:+e}; sampling against the accumulated total",
                residue
            );
        }

        let mut tallies = vec![0usize; probabilities.len()];
        for _ in 0..shots {
            // scaling by the accumulated mass keeps r strictly below the final cumulative value
            let r: f64 = rng.random::<f64>() * running;
            let mut k = cumulative.partition_point(|c| *c <= r);
            if k > last {
                warn!("draw {} fell past the cumulative distribution, assigned to the last basis state", r);
                k = last;
            }
            tallies[k] += 1;
        }
        trace!("sampled {} shots over {} basis states", shots, probabilities.len());

        Ok(tallies
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .map(|(k, count)| (self.state.bitstring(k), count))
            .collect())
    }

    fn qubit_index(&self, qubit: &QubitId) -> Result<usize, WalkError> {
        let idx = qubit.index();
        if idx >= self.state.num_qubits() {
            return Err(WalkError::backend(format!(
                "{} is outside the {}-qubit register",
                qubit,
                self.state.num_qubits()
            )));
        }
        Ok(idx)
    }

    /// Applies a 2x2 matrix to qubit `target`, pairing each basis state that has
    /// the target bit clear with its partner that has it set.
    fn apply_single_qubit_gate(&mut self, target: usize, matrix: &Matrix2) {
        let mask = 1usize << target;
        let amplitudes = self.state.amplitudes_mut();
        for i0 in 0..amplitudes.len() {
            if i0 & mask != 0 {
                continue;
            }
            let i1 = i0 | mask;
            let (psi_0, psi_1) = (amplitudes[i0], amplitudes[i1]);
            amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }

    /// CNOT as a permutation: swaps the target bit of every basis state whose control bit is set.
    fn apply_controlled_flip(&mut self, control: usize, target: usize) {
        let control_mask = 1usize << control;
        let target_mask = 1usize << target;
        let amplitudes = self.state.amplitudes_mut();
        for i in 0..amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                amplitudes.swap(i, i | target_mask);
            }
        }
    }

    /// Exact outcome distribution keyed by bitstring, zero-probability outcomes omitted.
    pub(crate) fn distribution(&self) -> BTreeMap<String, f64> {
        self.state
            .probabilities()
            .into_iter()
            .enumerate()
            .filter(|(_, p)| *p > PROBABILITY_FLOOR)
            .map(|(k, p)| (self.state.bitstring(k), p))
            .collect()
    }
}

/// Deviation of the accumulated probability mass from 1, if larger than rounding noise.
fn mass_residue(total: f64) -> Option<f64> {
    let residue = total - 1.0;
    (residue.abs() > PROBABILITY_FLOOR).then_some(residue)
}
