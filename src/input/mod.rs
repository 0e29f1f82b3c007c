//! Input model for algorithm runs
//!
//! This module provides the two input shapes the engine accepts:
//! - plain `Vec<i32>` arrays for the sorting algorithms, and
//! - [`Graph`]: an undirected weighted graph, validated once at
//!   construction and immutable thereafter.
//!
//! It also carries the random input generators used by the front-end.
//! Randomness lives strictly here: the steppers themselves are
//! deterministic, so a seeded [`Rng`] reproduces a run bit for bit.

use crate::engine::errors::EngineError;
use rand::seq::SliceRandom;
use rand::Rng;

/// An undirected edge `u — v` with a strictly positive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: u64,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: u64) -> Self {
        Edge { u, v, weight }
    }
}

/// An undirected weighted graph over vertices `0..vertex_count`.
///
/// Construction validates every edge; adjacency is built symmetrically (an
/// edge `(u, v, w)` yields traversable links `u → v` and `v → u`, both
/// weighted `w`) and is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, EngineError> {
        if vertex_count == 0 {
            return Err(EngineError::NoVertices);
        }
        for edge in &edges {
            if edge.u >= vertex_count || edge.v >= vertex_count {
                return Err(EngineError::EdgeOutOfRange {
                    u: edge.u,
                    v: edge.v,
                    vertex_count,
                });
            }
            if edge.u == edge.v {
                return Err(EngineError::SelfLoop { vertex: edge.u });
            }
            if edge.weight == 0 {
                return Err(EngineError::ZeroWeight {
                    u: edge.u,
                    v: edge.v,
                });
            }
        }

        // Symmetric adjacency in edge-list order: u→v first, then v→u.
        // Neighbor tie-breaking everywhere in the engine is insertion order,
        // so this ordering is observable in snapshots.
        let mut adjacency = vec![Vec::new(); vertex_count];
        for edge in &edges {
            adjacency[edge.u].push((edge.v, edge.weight));
            adjacency[edge.v].push((edge.u, edge.weight));
        }

        Ok(Graph {
            vertex_count,
            edges,
            adjacency,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `v` as `(vertex, weight)` pairs in insertion order.
    pub fn neighbors(&self, v: usize) -> &[(usize, u64)] {
        &self.adjacency[v]
    }
}

/// Generate a random array of `size` integers in `min..=max`.
pub fn random_array<R: Rng>(rng: &mut R, size: usize, min: i32, max: i32) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

/// Generate a random connected-ish graph with up to `edge_count` edges and
/// weights in `1..=10`.
///
/// All possible vertex pairs are enumerated, shuffled, and the first
/// `edge_count` taken, so no duplicate edges are produced.  Connectivity is
/// not guaranteed; traversal runs simply cover the reachable component.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: usize,
) -> Result<Graph, EngineError> {
    let mut pairs = Vec::new();
    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            pairs.push((u, v));
        }
    }
    pairs.shuffle(rng);

    let edges = pairs
        .into_iter()
        .take(edge_count)
        .map(|(u, v)| Edge::new(u, v, rng.gen_range(1..=10)))
        .collect();

    Graph::new(vertex_count, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn adjacency_is_symmetric_and_insertion_ordered() {
        let graph = Graph::new(
            3,
            vec![Edge::new(0, 1, 5), Edge::new(1, 2, 7), Edge::new(0, 2, 2)],
        )
        .expect("valid graph");

        assert_eq!(graph.neighbors(0), &[(1, 5), (2, 2)]);
        assert_eq!(graph.neighbors(1), &[(0, 5), (2, 7)]);
        assert_eq!(graph.neighbors(2), &[(1, 7), (0, 2)]);
    }

    #[test]
    fn rejects_invalid_graphs() {
        assert!(matches!(
            Graph::new(0, Vec::new()),
            Err(EngineError::NoVertices)
        ));
        assert!(matches!(
            Graph::new(2, vec![Edge::new(0, 2, 1)]),
            Err(EngineError::EdgeOutOfRange { .. })
        ));
        assert!(matches!(
            Graph::new(2, vec![Edge::new(1, 1, 1)]),
            Err(EngineError::SelfLoop { vertex: 1 })
        ));
        assert!(matches!(
            Graph::new(2, vec![Edge::new(0, 1, 0)]),
            Err(EngineError::ZeroWeight { .. })
        ));
    }

    #[test]
    fn random_graph_has_no_duplicate_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 6, 100).expect("valid graph");
        // Capped at C(6, 2) possible pairs.
        assert!(graph.edges().len() <= 15);
        for (i, a) in graph.edges().iter().enumerate() {
            for b in &graph.edges()[i + 1..] {
                assert!(!(a.u == b.u && a.v == b.v));
            }
        }
    }

    #[test]
    fn random_array_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_array(&mut rng, 50, 1, 100);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|&v| (1..=100).contains(&v)));
    }
}
