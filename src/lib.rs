// src/lib.rs

//! `qwalk` - discrete-time quantum random walks on small graphs
//!
//! A walk places one qubit on every vertex of a cycle, line or complete graph,
//! puts the register into superposition, then alternates a per-qubit coin with
//! an adjacency-driven shift for a fixed number of steps. The resulting circuit
//! is sampled on a simulation backend and the measured bitstrings are tallied.

pub mod core;
pub mod graph;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod walk;
pub mod suggestion;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{QubitId, StateVector, WalkError, COIN_PHASE, DEFAULT_SHOTS};
pub use graph::{Graph, Topology};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{ResultCounts, SimulationBackend, SimulatorConfig, StatevectorSimulator};
pub use walk::{WalkEngine, WalkParameters};
pub use suggestion::{Suggestion, suggest_graph, explain_graph, application_insight};
pub use validation::{check_normalization, validate_counts};

// Example 1: A walk on a triangle
// Builds the three-vertex cycle, runs a two-step walk and checks the shape of
// the returned counts.
/// ```
/// use qwalk::{StatevectorSimulator, Topology, WalkEngine, WalkError, WalkParameters};
///
/// # fn main() -> Result<(), WalkError> {
/// let params = WalkParameters::new(3, 2, Topology::Cycle);
/// let engine = WalkEngine::new(params, StatevectorSimulator::seeded(7))?;
///
/// println!("{}", engine.graph());
/// let counts = engine.run_walk()?;
/// println!("{}", counts);
///
/// assert_eq!(counts.total(), 1024);
/// assert!(counts.bitstrings().all(|b| b.len() == 3));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: One step returns to the origin
// The coin's Hadamard cancels the initial one, leaving |0...0> untouched by the
// shift, so a single step measures all zeros on every shot.
/// ```
/// use qwalk::{StatevectorSimulator, WalkEngine, WalkError};
///
/// # fn main() -> Result<(), WalkError> {
/// let engine = WalkEngine::from_graph_type(4, 1, "complete", StatevectorSimulator::new())?;
/// let counts = engine.run_walk()?;
/// assert_eq!(counts.get("0000"), 1024);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
