//! Static weighted graph model.

use crate::error::GraphError;
use rand::Rng;

/// Opaque node identity. Nodes carry no payload beyond identity and
/// adjacency; ids are dense indices in `0..node_count`.
pub type NodeId = usize;

/// Index into the trail field.
///
/// An undirected edge shares one `EdgeId` across both directions, so a
/// deposit strengthens the edge as a whole. Directed arcs get their own id.
pub type EdgeId = usize;

/// One outgoing connection in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef {
    /// Target node.
    pub to: NodeId,
    /// Traversal cost. Positive, fixed at construction.
    pub distance: f64,
    /// Trail-field slot for this connection.
    pub edge: EdgeId,
}

/// Static weighted graph: a fixed node set plus distance-weighted edges.
///
/// The graph is immutable once handed to the colony. The mutable trail
/// levels live separately in [`TrailField`](crate::graph::TrailField),
/// indexed by the [`EdgeId`]s this graph assigns.
///
/// # Examples
///
/// ```
/// use stigroute::graph::RouteGraph;
///
/// let mut graph = RouteGraph::new(3);
/// graph.add_edge(0, 1, 2.5).unwrap();
/// graph.add_edge(1, 2, 4.0).unwrap();
/// assert_eq!(graph.distance(1, 0).unwrap(), 2.5);
/// assert!(graph.distance(0, 2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RouteGraph {
    adjacency: Vec<Vec<EdgeRef>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Creates an empty graph over a fixed node set `0..node_count`.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from an undirected edge list.
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId, f64)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for &(a, b, distance) in edges {
            graph.add_edge(a, b, distance)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge. Both directions share the returned
    /// [`EdgeId`], so trail deposits in either direction reinforce the
    /// same slot.
    ///
    /// Fails with [`GraphError::InvalidGraph`] if an endpoint is outside
    /// the node set or the distance is not strictly positive.
    pub fn add_edge(
        &mut self,
        a: NodeId,
        b: NodeId,
        distance: f64,
    ) -> Result<EdgeId, GraphError> {
        self.check_endpoints(a, b, distance)?;
        let edge = self.edge_count;
        self.edge_count += 1;
        self.adjacency[a].push(EdgeRef { to: b, distance, edge });
        self.adjacency[b].push(EdgeRef { to: a, distance, edge });
        Ok(edge)
    }

    /// Adds a directed arc with its own [`EdgeId`].
    pub fn add_arc(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: f64,
    ) -> Result<EdgeId, GraphError> {
        self.check_endpoints(from, to, distance)?;
        let edge = self.edge_count;
        self.edge_count += 1;
        self.adjacency[from].push(EdgeRef { to, distance, edge });
        Ok(edge)
    }

    fn check_endpoints(
        &self,
        from: NodeId,
        to: NodeId,
        distance: f64,
    ) -> Result<(), GraphError> {
        let n = self.adjacency.len();
        if from >= n || to >= n {
            return Err(GraphError::InvalidGraph(format!(
                "edge ({from}, {to}) references a node outside 0..{n}"
            )));
        }
        if !(distance > 0.0) {
            return Err(GraphError::InvalidGraph(format!(
                "edge ({from}, {to}) has non-positive distance {distance}"
            )));
        }
        Ok(())
    }

    /// Outgoing connections of `node`. Out-of-range nodes have none.
    pub fn neighbors(&self, node: NodeId) -> &[EdgeRef] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distance of the `from -> to` connection.
    ///
    /// Fails with [`GraphError::UnknownEdge`] if the pair is not adjacent.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, GraphError> {
        self.edge_ref(from, to).map(|e| e.distance)
    }

    /// Trail-field slot of the `from -> to` connection.
    ///
    /// Fails with [`GraphError::UnknownEdge`] if the pair is not adjacent.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Result<EdgeId, GraphError> {
        self.edge_ref(from, to).map(|e| e.edge)
    }

    fn edge_ref(&self, from: NodeId, to: NodeId) -> Result<&EdgeRef, GraphError> {
        self.neighbors(from)
            .iter()
            .find(|e| e.to == to)
            .ok_or(GraphError::UnknownEdge { from, to })
    }

    /// Number of nodes in the declared node set.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct trail-field slots (undirected edges count once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Generates a random connected undirected graph: a spanning tree
    /// first (so every node is reachable), then extra edges between each
    /// remaining pair with probability `connectivity`. Distances are
    /// uniform in `(1.0, max_distance)`.
    ///
    /// # Panics
    ///
    /// Panics if `max_distance <= 1.0`.
    pub fn random<R: Rng>(
        node_count: usize,
        connectivity: f64,
        max_distance: f64,
        rng: &mut R,
    ) -> Self {
        let mut graph = Self::new(node_count);

        for i in 1..node_count {
            let target = rng.random_range(0..i);
            let distance = rng.random_range(1.0..max_distance);
            graph
                .add_edge(i, target, distance)
                .expect("spanning-tree edges are valid by construction");
        }

        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let adjacent = graph.neighbors(i).iter().any(|e| e.to == j);
                if !adjacent && rng.random_range(0.0..1.0) < connectivity {
                    let distance = rng.random_range(1.0..max_distance);
                    graph
                        .add_edge(i, j, distance)
                        .expect("extra edges are valid by construction");
                }
            }
        }

        graph
    }
}
