// src/suggestion/mod.rs

//! Randomised topology suggestions and canned explanatory text.
//!
//! Everything here is a pure function of the random source passed in. Nothing
//! is shared with [`crate::walk`], so a suggestion never influences a simulation.

use crate::graph::Topology;
use rand::{Rng, RngExt};
use std::fmt;

const CYCLE_EXPLANATION: &str = "A cycle graph is useful for modeling periodic structures. In quantum random walks, this leads to cyclic symmetry and unique interference patterns.";
const LINE_EXPLANATION: &str = "A line graph is a simple linear arrangement of vertices. Quantum walks on line graphs often exhibit diffusion-like behavior.";
const COMPLETE_EXPLANATION: &str = "A complete graph connects every pair of vertices. Quantum walks on such graphs can leverage full symmetry, enabling rapid mixing.";

/// Returned by [`explain_graph_name`] for tokens that name no topology.
pub const NO_EXPLANATION: &str = "No explanation available for this graph type.";

/// Application notes handed out by [`application_insight`].
pub const APPLICATION_INSIGHTS: [&str; 3] = [
    "Quantum random walks on graphs have applications in quantum search algorithms and network routing optimization.",
    "Quantum walks on cyclic graphs can be applied in algorithms for solving graph isomorphism problems.",
    "Quantum walks on complete graphs demonstrate exponential speedup in certain computational tasks.",
];

/// A suggested topology together with its explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub topology: Topology,
    pub explanation: &'static str,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suggested Graph: {}", self.topology)?;
        write!(f, "Explanation: {}", self.explanation)
    }
}

/// Picks one of the supported topologies uniformly at random.
pub fn suggest_graph<R: Rng + ?Sized>(rng: &mut R) -> Suggestion {
    let topology = Topology::ALL[rng.random_range(0..Topology::ALL.len())];
    Suggestion {
        topology,
        explanation: explain_graph(topology),
    }
}

/// The fixed explanation for `topology`.
pub fn explain_graph(topology: Topology) -> &'static str {
    match topology {
        Topology::Cycle => CYCLE_EXPLANATION,
        Topology::Line => LINE_EXPLANATION,
        Topology::Complete => COMPLETE_EXPLANATION,
    }
}

/// Explanation for a topology token, [`NO_EXPLANATION`] if it names none.
pub fn explain_graph_name(name: &str) -> &'static str {
    name.parse::<Topology>()
        .map(explain_graph)
        .unwrap_or(NO_EXPLANATION)
}

/// One of [`APPLICATION_INSIGHTS`], chosen uniformly at random.
pub fn application_insight<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    APPLICATION_INSIGHTS[rng.random_range(0..APPLICATION_INSIGHTS.len())]
}
