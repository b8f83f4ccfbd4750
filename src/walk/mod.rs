// src/walk/mod.rs

//! Discrete-time quantum random walk on a [`Graph`].
//!
//! A walk of `s` steps on `n` qubits is the circuit
//!
//! ```text
//! H on every qubit
//! repeat s times:
//!     coin  P(π/4)·H on every qubit
//!     shift CNOT(i, j) for every (i, j) with adjacency[i][j] = 1
//! measure every qubit
//! ```
//!
//! The shift scans the whole `n x n` adjacency matrix, so each undirected edge
//! contributes two controlled flips, `CNOT(i, j)` then later `CNOT(j, i)`.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::{COIN_PHASE, DEFAULT_SHOTS, QubitId, WalkError};
use crate::graph::{Graph, Topology};
use crate::operations::Operation;
use crate::simulation::{ResultCounts, SimulationBackend, StatevectorSimulator};
use log::{debug, info};

/// Inputs of one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkParameters {
    /// Register width, which is also the number of graph vertices.
    pub num_qubits: usize,
    /// Number of coin + shift rounds.
    pub steps: usize,
    pub topology: Topology,
}

impl WalkParameters {
    pub fn new(num_qubits: usize, steps: usize, topology: Topology) -> Self {
        Self { num_qubits, steps, topology }
    }

    /// Number of primitive operations in the walk circuit for a graph with `edges` edges:
    /// `n + s * (n + 2 * edges)`.
    pub fn operation_count(&self, edges: usize) -> usize {
        self.num_qubits + self.steps * (self.num_qubits + 2 * edges)
    }
}

/// Builds and executes quantum walks against an injected backend.
///
/// The engine holds no circuit between calls: every [`run_walk`](Self::run_walk)
/// constructs its own operator sequence, so separate engines (or repeated calls)
/// never share mutable state.
pub struct WalkEngine<B: SimulationBackend = StatevectorSimulator> {
    params: WalkParameters,
    graph: Graph,
    backend: B,
}

impl WalkEngine<StatevectorSimulator> {
    /// Engine backed by a default [`StatevectorSimulator`].
    pub fn with_default_backend(params: WalkParameters) -> Result<Self, WalkError> {
        Self::new(params, StatevectorSimulator::new())
    }
}

impl<B: SimulationBackend> WalkEngine<B> {
    /// Validates `params`, builds the walk graph and takes ownership of `backend`.
    ///
    /// # Errors
    /// `WalkError::InvalidParameter` if the qubit count is too small for the topology.
    pub fn new(params: WalkParameters, backend: B) -> Result<Self, WalkError> {
        let graph = Graph::build(params.num_qubits, params.topology)?;
        debug!("walk graph: {}", graph);
        Ok(Self { params, graph, backend })
    }

    /// Like [`new`](Self::new), resolving the topology from its name first.
    ///
    /// # Errors
    /// `WalkError::UnsupportedTopology` for an unknown `graph_type`; the backend is
    /// never touched in that case.
    pub fn from_graph_type(
        num_qubits: usize,
        steps: usize,
        graph_type: &str,
        backend: B,
    ) -> Result<Self, WalkError> {
        let topology: Topology = graph_type.parse()?;
        Self::new(WalkParameters::new(num_qubits, steps, topology), backend)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn parameters(&self) -> &WalkParameters {
        &self.params
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Constructs the full walk circuit, measurement included.
    pub fn build_circuit(&self) -> Circuit {
        let n = self.params.num_qubits;
        let shift = self.shift_operations();

        let mut builder = CircuitBuilder::new(n).superpose_all();
        for _ in 0..self.params.steps {
            builder = builder
                .add_ops((0..n).map(|q| Operation::Coin {
                    target: QubitId(q),
                    theta: COIN_PHASE,
                }))
                .add_ops(shift.iter().cloned());
        }
        let circuit = builder.measure_all().build();

        debug!(
            "built walk circuit: {} operations ({} controlled) over {} steps",
            circuit.len(),
            circuit.controlled_count(),
            self.params.steps
        );
        circuit
    }

    /// One controlled flip per nonzero entry of the adjacency matrix, row-major.
    fn shift_operations(&self) -> Vec<Operation> {
        let matrix = self.graph.adjacency_matrix();
        let mut ops = Vec::new();
        for (i, row) in matrix.iter().enumerate() {
            for (j, &entry) in row.iter().enumerate() {
                if entry == 1 {
                    ops.push(Operation::ControlledFlip {
                        control: QubitId(i),
                        target: QubitId(j),
                    });
                }
            }
        }
        ops
    }

    /// Builds the walk circuit, executes it for [`DEFAULT_SHOTS`] shots and returns
    /// the backend's counts unchanged.
    ///
    /// # Errors
    /// Any `WalkError::BackendExecution` raised by the backend, propagated as is.
    pub fn run_walk(&self) -> Result<ResultCounts, WalkError> {
        let circuit = self.build_circuit();
        info!(
            "running {}-step walk on {} ({} shots, backend {})",
            self.params.steps,
            self.graph,
            DEFAULT_SHOTS,
            self.backend.name()
        );
        let counts = self.backend.execute(&circuit, DEFAULT_SHOTS)?;
        info!("walk finished with {} distinct outcomes", counts.len());
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(i: usize) -> QubitId {
        QubitId(i)
    }

    fn flip(control: usize, target: usize) -> Operation {
        Operation::ControlledFlip { control: q(control), target: q(target) }
    }

    #[test]
    fn test_line_of_four_two_steps_layout() -> Result<(), WalkError> {
        let engine = WalkEngine::with_default_backend(WalkParameters::new(4, 2, Topology::Line))?;
        let circuit = engine.build_circuit();
        let ops = circuit.operations();

        assert_eq!(circuit.len(), 24);
        assert_eq!(engine.parameters().operation_count(engine.graph().edge_count()), 24);
        assert!(circuit.is_measured());

        for (k, op) in ops[..4].iter().enumerate() {
            assert_eq!(op, &Operation::Superposition { target: q(k) });
        }
        let expected_step = |start: usize| {
            for (k, op) in ops[start..start + 4].iter().enumerate() {
                assert_eq!(op, &Operation::Coin { target: q(k), theta: COIN_PHASE });
            }
            assert_eq!(
                &ops[start + 4..start + 10],
                &[flip(0, 1), flip(1, 0), flip(1, 2), flip(2, 1), flip(2, 3), flip(3, 2)]
            );
        };
        expected_step(4);
        expected_step(14);
        Ok(())
    }

    #[test]
    fn test_each_edge_gives_two_controlled_flips() -> Result<(), WalkError> {
        let engine = WalkEngine::with_default_backend(WalkParameters::new(4, 1, Topology::Complete))?;
        let circuit = engine.build_circuit();
        assert_eq!(engine.graph().edge_count(), 6);
        assert_eq!(circuit.controlled_count(), 12);
        Ok(())
    }

    #[test]
    fn test_zero_steps_is_initialization_only() -> Result<(), WalkError> {
        let engine = WalkEngine::with_default_backend(WalkParameters::new(3, 0, Topology::Cycle))?;
        let circuit = engine.build_circuit();
        assert_eq!(circuit.len(), 3);
        assert!(circuit.is_measured());
        assert!(circuit
            .operations()
            .iter()
            .all(|op| matches!(op, Operation::Superposition { .. })));
        Ok(())
    }

    #[test]
    fn test_repeated_builds_do_not_accumulate() -> Result<(), WalkError> {
        let engine = WalkEngine::with_default_backend(WalkParameters::new(3, 2, Topology::Cycle))?;
        assert_eq!(engine.build_circuit(), engine.build_circuit());
        Ok(())
    }

    #[test]
    fn test_from_graph_type_rejects_unknown_topology() {
        let result = WalkEngine::from_graph_type(3, 1, "star", StatevectorSimulator::new());
        assert!(matches!(result, Err(WalkError::UnsupportedTopology(ref t)) if t == "star"));
    }
}
