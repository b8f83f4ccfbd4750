// src/simulation/mod.rs

//! Execution of circuits on a simulation backend.
//!
//! [`SimulationBackend`] is the only contract the walk engine relies on: take an
//! ordered, measured circuit and a shot count, return bitstring counts.
//! [`StatevectorSimulator`] is the built-in implementation.

mod results;
pub(crate) mod engine;

pub use results::ResultCounts;

use crate::circuits::Circuit;
use crate::core::{DEFAULT_MAX_QUBITS, WalkError};
use crate::validation::validate_counts;
use engine::SimulationEngine;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;

/// A substitutable executor for walk circuits.
///
/// Implementations must treat each `execute` call as atomic: it either returns
/// counts for all `shots` executions or fails, holding no state between calls.
pub trait SimulationBackend: Send + Sync {
    /// Backend name used in logs.
    fn name(&self) -> &str;

    /// Runs `circuit` `shots` times and returns how often each bitstring was measured.
    ///
    /// # Errors
    /// `WalkError::BackendExecution` if the circuit cannot be executed.
    fn execute(&self, circuit: &Circuit, shots: usize) -> Result<ResultCounts, WalkError>;
}

/// Settings for [`StatevectorSimulator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Fixed seed for reproducible sampling. `None` draws a fresh seed per execution.
    pub seed: Option<u64>,
    /// Largest register accepted.
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

/// Dense statevector simulator with shot sampling.
#[derive(Debug, Clone, Default)]
pub struct StatevectorSimulator {
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Creates a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a simulator whose sampling is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(SimulatorConfig {
            seed: Some(seed),
            ..SimulatorConfig::default()
        })
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Exact measurement distribution of `circuit`, without sampling.
    ///
    /// The measurement flag is ignored; outcomes with zero probability are omitted.
    pub fn probabilities(&self, circuit: &Circuit) -> Result<BTreeMap<String, f64>, WalkError> {
        Ok(self.evolve(circuit)?.distribution())
    }

    fn check_capacity(&self, circuit: &Circuit) -> Result<(), WalkError> {
        if circuit.num_qubits() > self.config.max_qubits {
            return Err(WalkError::backend(format!(
                "circuit needs {} qubits, simulator supports at most {}",
                circuit.num_qubits(),
                self.config.max_qubits
            )));
        }
        Ok(())
    }

    fn evolve(&self, circuit: &Circuit) -> Result<SimulationEngine, WalkError> {
        self.check_capacity(circuit)?;
        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        for op in circuit.operations() {
            engine.apply_operation(op)?;
        }
        Ok(engine)
    }
}

impl SimulationBackend for StatevectorSimulator {
    fn name(&self) -> &str {
        "statevector_simulator"
    }

    fn execute(&self, circuit: &Circuit, shots: usize) -> Result<ResultCounts, WalkError> {
        if shots == 0 {
            return Err(WalkError::backend("shot count must be positive"));
        }
        if !circuit.is_measured() {
            return Err(WalkError::backend("circuit has no measurement to sample"));
        }

        let engine = self.evolve(circuit)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => rand::make_rng::<StdRng>(),
        };
        let counts = ResultCounts::new(engine.sample(shots, &mut rng)?, shots);
        validate_counts(&counts, circuit.num_qubits(), shots)?;

        debug!(
            "{}: {} operations on {} qubits, {} shots, {} distinct outcomes",
            self.name(),
            circuit.len(),
            circuit.num_qubits(),
            shots,
            counts.len()
        );
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::QubitId;
    use crate::operations::Operation;

    fn bell_circuit() -> Circuit {
        CircuitBuilder::new(2)
            .add_op(Operation::Superposition { target: QubitId(0) })
            .add_op(Operation::ControlledFlip { control: QubitId(0), target: QubitId(1) })
            .measure_all()
            .build()
    }

    #[test]
    fn test_execute_counts_sum_to_shots() -> Result<(), WalkError> {
        let counts = StatevectorSimulator::seeded(3).execute(&bell_circuit(), 1024)?;
        assert_eq!(counts.total(), 1024);
        assert_eq!(counts.shots(), 1024);
        assert!(counts.bitstrings().all(|b| b == "00" || b == "11"));
        Ok(())
    }

    #[test]
    fn test_seeded_execution_is_reproducible() -> Result<(), WalkError> {
        let sim = StatevectorSimulator::seeded(42);
        let first = sim.execute(&bell_circuit(), 500)?;
        let second = sim.execute(&bell_circuit(), 500)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_unmeasured_circuit_is_rejected() {
        let circuit = CircuitBuilder::new(1).superpose_all().build();
        match StatevectorSimulator::new().execute(&circuit, 10) {
            Err(WalkError::BackendExecution { message }) => assert!(message.contains("measurement")),
            other => panic!("Expected BackendExecution error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_shots_is_rejected() {
        assert!(StatevectorSimulator::new().execute(&bell_circuit(), 0).is_err());
    }

    #[test]
    fn test_capacity_limit() {
        let sim = StatevectorSimulator::with_config(SimulatorConfig { seed: None, max_qubits: 3 });
        let circuit = CircuitBuilder::new(4).superpose_all().measure_all().build();
        match sim.execute(&circuit, 10) {
            Err(WalkError::BackendExecution { message }) => assert!(message.contains("at most 3")),
            other => panic!("Expected BackendExecution error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_qubit_is_rejected() {
        let circuit = CircuitBuilder::new(2)
            .add_op(Operation::Coin { target: QubitId(5), theta: 0.0 })
            .measure_all()
            .build();
        assert!(matches!(
            StatevectorSimulator::new().execute(&circuit, 10),
            Err(WalkError::BackendExecution { .. })
        ));
    }

    #[test]
    fn test_exact_probabilities() -> Result<(), WalkError> {
        let dist = StatevectorSimulator::new().probabilities(&bell_circuit())?;
        assert_eq!(dist.keys().collect::<Vec<_>>(), vec!["00", "11"]);
        assert!((dist["00"] - 0.5).abs() < 1e-12);
        Ok(())
    }
}
