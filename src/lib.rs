//! Stigmergic graph-routing engine.
//!
//! A population of independent exploratory agents discovers and reinforces
//! efficient paths through a weighted graph purely via an indirect, shared
//! medium: a decaying trail value per edge. There is no central planner and
//! agents never exchange messages — shorter successful tours deposit more
//! trail per edge, evaporation decays stale information, and the positive
//! feedback between the two concentrates traffic on efficient routes.
//!
//! # Components
//!
//! - [`graph`]: the static weighted graph ([`RouteGraph`](graph::RouteGraph))
//!   and the mutable trail field ([`TrailField`](graph::TrailField)).
//! - [`colony`]: the probabilistic selection policy, tour-building agents,
//!   the generation scheduler ([`ColonyRunner`](colony::ColonyRunner)), and
//!   the convergence monitor.
//! - [`error`]: the error taxonomy — only graph construction is fatal.
//!
//! # Example
//!
//! ```
//! use stigroute::colony::{ColonyConfig, ColonyRunner, RunStatus};
//! use stigroute::graph::RouteGraph;
//!
//! // Two routes from 0 to 3: direct but long, or via 1 and 2.
//! let graph = RouteGraph::from_edges(
//!     4,
//!     &[(0, 3, 9.0), (0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0)],
//! )
//! .unwrap();
//!
//! let config = ColonyConfig::new(0, 3)
//!     .with_population_size(30)
//!     .with_iteration_cap(50)
//!     .with_seed(42);
//!
//! let result = ColonyRunner::run(&graph, &config);
//! assert_eq!(result.status, RunStatus::Solved);
//! assert_eq!(result.best_cost, 6.0);
//! ```
//!
//! The engine does not guarantee optimality; it is a metaheuristic, not a
//! shortest-path solver. Given a fixed seed, runs are fully reproducible,
//! including with parallel tour building enabled.

pub mod colony;
pub mod error;
pub mod graph;
