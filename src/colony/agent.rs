//! Tour-building agent.
//!
//! An agent is a stateful walker that builds one simple path from origin
//! to destination per generation. It reads the shared trail field through
//! an immutable reference and never writes it; the only coordination
//! between agents is the trail the scheduler updates after the whole
//! generation has finished.

use super::selection::SelectionPolicy;
use crate::graph::{NodeId, RouteGraph, TrailField};
use rand::Rng;

/// A completed simple path from origin to destination.
///
/// Immutable once frozen by the agent that built it. `cost` is the sum of
/// traversed edge distances; no node repeats within a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    nodes: Vec<NodeId>,
    cost: f64,
}

impl Tour {
    /// Visited nodes in order, origin first, destination last.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Total traversed distance.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consecutive `(from, to)` pairs along the tour.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Agent lifecycle: `Exploring` until the destination is reached
/// (`Succeeded`) or the walk dies (`Failed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// Still extending the path.
    Exploring,
    /// Reached the destination; the tour is frozen.
    Succeeded,
    /// Dead end or exhausted step budget. A legitimate per-generation
    /// outcome, not an error: the agent simply contributes no tour.
    Failed,
}

/// One exploratory walker.
///
/// The step budget bounds worst-case exploration so a generation always
/// terminates, even on graphs with long detours.
pub struct Agent<'a> {
    graph: &'a RouteGraph,
    trails: &'a TrailField,
    policy: SelectionPolicy,
    destination: NodeId,
    step_budget: usize,
    steps: usize,
    state: AgentState,
    visited: Vec<bool>,
    path: Vec<NodeId>,
    cost: f64,
}

impl<'a> Agent<'a> {
    /// Places a new agent at `origin` with only the origin visited.
    ///
    /// An agent whose origin *is* the destination succeeds immediately
    /// with a single-node, zero-cost tour.
    pub fn new(
        graph: &'a RouteGraph,
        trails: &'a TrailField,
        policy: SelectionPolicy,
        origin: NodeId,
        destination: NodeId,
        step_budget: usize,
    ) -> Self {
        let mut visited = vec![false; graph.node_count()];
        visited[origin] = true;
        Self {
            graph,
            trails,
            policy,
            destination,
            step_budget,
            steps: 0,
            state: if origin == destination {
                AgentState::Succeeded
            } else {
                AgentState::Exploring
            },
            visited,
            path: vec![origin],
            cost: 0.0,
        }
    }

    /// Current state.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Node the agent currently stands on.
    pub fn current(&self) -> NodeId {
        *self.path.last().expect("path always holds the origin")
    }

    /// Advances one step: sample an unvisited neighbor, move, mark
    /// visited. A dead end or an exhausted budget transitions to
    /// `Failed`; reaching the destination transitions to `Succeeded`.
    /// No-op once terminal.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> AgentState {
        if self.state != AgentState::Exploring {
            return self.state;
        }
        if self.steps >= self.step_budget {
            self.state = AgentState::Failed;
            return self.state;
        }
        self.steps += 1;

        let current = self.current();
        match self
            .policy
            .select(self.graph, self.trails, current, &self.visited, rng)
        {
            Ok(next) => {
                let distance = self
                    .graph
                    .distance(current, next)
                    .expect("policy only yields adjacent nodes");
                self.path.push(next);
                self.visited[next] = true;
                self.cost += distance;
                if next == self.destination {
                    self.state = AgentState::Succeeded;
                }
            }
            Err(_) => self.state = AgentState::Failed,
        }
        self.state
    }

    /// Drives the agent to a terminal state and reports its tour.
    ///
    /// `None` is a failed attempt: counted for diagnostics by the
    /// scheduler, otherwise discarded.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> Option<Tour> {
        while self.state == AgentState::Exploring {
            self.step(rng);
        }
        match self.state {
            AgentState::Succeeded => Some(Tour {
                nodes: self.path,
                cost: self.cost,
            }),
            _ => None,
        }
    }
}
