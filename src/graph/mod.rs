// src/graph/mod.rs

//! The classical graph a walk runs on.
//!
//! Vertices are the qubit indices `0..n`; the edge set is fixed entirely by the
//! [`Topology`]. Edges are undirected and stored once, canonicalised as `(i, j)`
//! with `i < j`, so two builds with the same inputs are always identical.

use crate::core::WalkError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Rule deciding which vertex pairs are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// `i ~ (i + 1) mod n` for every vertex.
    Cycle,
    /// `i ~ i + 1` for `i` in `0..n-1`.
    Line,
    /// Every distinct pair.
    Complete,
}

impl Topology {
    /// All supported topologies, in the order they are listed to users.
    pub const ALL: [Topology; 3] = [Topology::Cycle, Topology::Line, Topology::Complete];

    /// The lowercase token used on the command line and in text output.
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Cycle => "cycle",
            Topology::Line => "line",
            Topology::Complete => "complete",
        }
    }

    /// Smallest vertex count for which the topology has a meaningful edge set.
    pub fn min_vertices(&self) -> usize {
        match self {
            Topology::Line => 1,
            Topology::Cycle | Topology::Complete => 2,
        }
    }
}

impl FromStr for Topology {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cycle" => Ok(Topology::Cycle),
            "line" => Ok(Topology::Line),
            "complete" => Ok(Topology::Complete),
            other => Err(WalkError::UnsupportedTopology(other.to_string())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An undirected simple graph over the vertices `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    topology: Topology,
    num_vertices: usize,
    edges: BTreeSet<(usize, usize)>,
}

impl Graph {
    /// Builds the graph for `n` vertices under `topology`.
    ///
    /// # Errors
    /// `WalkError::InvalidParameter` if `n` is below [`Topology::min_vertices`].
    pub fn build(n: usize, topology: Topology) -> Result<Self, WalkError> {
        if n < topology.min_vertices() {
            return Err(WalkError::invalid_parameter(format!(
                "a {} graph needs at least {} vertices, got {}",
                topology,
                topology.min_vertices(),
                n
            )));
        }

        let mut edges = BTreeSet::new();
        let mut insert = |a: usize, b: usize| {
            if a != b {
                edges.insert((a.min(b), a.max(b)));
            }
        };

        match topology {
            // for n = 2 both wrap-around edges collapse into (0, 1)
            Topology::Cycle => (0..n).for_each(|i| insert(i, (i + 1) % n)),
            Topology::Line => (1..n).for_each(|i| insert(i - 1, i)),
            Topology::Complete => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        insert(i, j);
                    }
                }
            }
        }

        Ok(Self { topology, num_vertices: n, edges })
    }

    /// Parses `name` as a topology, then builds the graph.
    ///
    /// # Errors
    /// `WalkError::UnsupportedTopology` for an unknown token, otherwise as [`Graph::build`].
    pub fn from_name(n: usize, name: &str) -> Result<Self, WalkError> {
        Self::build(n, name.parse()?)
    }

    /// The canonical edge set, each edge as `(i, j)` with `i < j`, in ascending order.
    pub fn adjacency(&self) -> &BTreeSet<(usize, usize)> {
        &self.edges
    }

    /// Symmetric `n x n` 0/1 adjacency matrix, rows and columns indexed by vertex.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let mut matrix = vec![vec![0u8; self.num_vertices]; self.num_vertices];
        for &(i, j) in &self.edges {
            matrix[i][j] = 1;
            matrix[j][i] = 1;
        }
        matrix
    }

    /// Vertices adjacent to `v`, ascending. Empty for an out-of-range vertex.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|&(i, j)| match (i == v, j == v) {
                (true, _) => Some(j),
                (_, true) => Some(i),
                _ => None,
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of edges incident to `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|&&(i, j)| i == v || j == v).count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} graph: {} vertices, {} edges [",
            self.topology,
            self.num_vertices,
            self.edges.len()
        )?;
        for (k, (i, j)) in self.edges.iter().enumerate() {
            write!(f, "{}{}-{}", if k > 0 { ", " } else { "" }, i, j)?;
        }
        write!(f, "]")
    }
}
