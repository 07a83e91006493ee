//! Graph model and shared trail field.
//!
//! [`RouteGraph`] is the static side: nodes, adjacency, and per-edge
//! distances, immutable once constructed. [`TrailField`] is the mutable
//! side: one decaying trail level per edge, the colony's only persistent
//! shared memory. Keeping the two separate lets a whole generation of
//! agents read the graph and the trails concurrently while the scheduler
//! alone mutates trail levels between generations.

mod model;
mod trail;

pub use model::{EdgeId, EdgeRef, NodeId, RouteGraph};
pub use trail::TrailField;
