//! Shared trail field.
//!
//! The trail field is the colony's only persistent shared memory: one
//! decaying scalar per edge, deposited on by successful tours and read by
//! every agent's selection step. Agents hold it by shared reference only;
//! all mutation happens inside the scheduler's between-generation barrier.

use crate::graph::{EdgeId, NodeId, RouteGraph};

/// Mutable trail levels, indexed by [`EdgeId`].
///
/// Levels are initialized to the floor (a small positive constant — never
/// zero, so no edge starts permanently unselectable) and clamped back to
/// the floor after each evaporate/deposit cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailField {
    levels: Vec<f64>,
    floor: f64,
}

impl TrailField {
    /// Creates a field of `edge_count` levels, all starting at `floor`.
    pub fn new(edge_count: usize, floor: f64) -> Self {
        Self {
            levels: vec![floor; edge_count],
            floor,
        }
    }

    /// Creates a field sized for every edge of `graph`.
    pub fn for_graph(graph: &RouteGraph, floor: f64) -> Self {
        Self::new(graph.edge_count(), floor)
    }

    /// Current trail level of an edge.
    pub fn level(&self, edge: EdgeId) -> f64 {
        self.levels[edge]
    }

    /// Sets an edge's level, clamped up to the floor.
    pub fn set(&mut self, edge: EdgeId, value: f64) {
        self.levels[edge] = value.max(self.floor);
    }

    /// Multiplicative decay on every edge: `level *= 1 - rho`.
    ///
    /// Applied uniformly and unconditionally once per generation, before
    /// deposits. Levels may drop below the floor here; the scheduler
    /// re-clamps with [`clamp_to_floor`](Self::clamp_to_floor) after the
    /// deposit phase.
    pub fn evaporate(&mut self, rho: f64) {
        for level in &mut self.levels {
            *level *= 1.0 - rho;
        }
    }

    /// Additive deposit on a single edge.
    pub fn deposit(&mut self, edge: EdgeId, amount: f64) {
        self.levels[edge] += amount;
    }

    /// Raises every level below the floor back to it.
    pub fn clamp_to_floor(&mut self) {
        for level in &mut self.levels {
            if *level < self.floor {
                *level = self.floor;
            }
        }
    }

    /// The configured minimum level (also the initial level).
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Number of edges tracked.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if the field tracks no edges.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// All levels, indexed by [`EdgeId`].
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Follows the strongest-trail unvisited neighbor greedily from
    /// `from` until `to` is reached. Returns the path and its total
    /// distance, or `None` on a dead end.
    ///
    /// Diagnostic only: reads the field exactly as an agent would, but
    /// with the stochastic choice replaced by an argmax.
    pub fn greedy_path(
        &self,
        graph: &RouteGraph,
        from: NodeId,
        to: NodeId,
    ) -> Option<(Vec<NodeId>, f64)> {
        let mut path = vec![from];
        let mut visited = vec![false; graph.node_count()];
        visited[from] = true;
        let mut current = from;
        let mut total = 0.0;

        while current != to {
            let next = graph
                .neighbors(current)
                .iter()
                .filter(|e| !visited[e.to])
                .max_by(|a, b| {
                    self.level(a.edge)
                        .partial_cmp(&self.level(b.edge))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })?;
            path.push(next.to);
            visited[next.to] = true;
            total += next.distance;
            current = next.to;
        }

        Some((path, total))
    }
}
