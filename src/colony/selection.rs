//! Edge selection: the trail/distance transition rule and the reusable
//! weighted-random sampling primitive.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", Equation (4)

use crate::error::NoCandidates;
use crate::graph::{NodeId, RouteGraph, TrailField};
use rand::Rng;

/// Samples an index from `weights` with probability proportional to its
/// weight: a single uniform draw partitions the cumulative-weight line.
///
/// Returns `None` for an empty slice.
///
/// # Degenerate weights
///
/// If every weight is zero, or the total is non-finite, the draw falls
/// back to a **uniform** distribution over all indices instead of
/// failing. This keeps the selection policy total even in the edge case
/// where both influence exponents are zero over a zero trail.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }

    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Some(rng.random_range(0..weights.len()));
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }
    Some(weights.len() - 1) // floating-point fallback
}

/// The probabilistic transition rule over unvisited neighbors.
///
/// For each candidate edge the weight is `trail^alpha * (1/distance)^beta`:
/// `alpha` scales how strongly accumulated trail attracts, `beta` how
/// strongly short edges attract. Both are run-level constants, >= 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionPolicy {
    /// Trail influence exponent.
    pub alpha: f64,
    /// Inverse-distance influence exponent.
    pub beta: f64,
}

impl SelectionPolicy {
    /// Creates a policy with the given influence exponents.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Samples the next node among the unvisited neighbors of `current`.
    ///
    /// `visited` is indexed by [`NodeId`]. An empty candidate set is a
    /// dead end and resolves to [`NoCandidates`]; the caller treats it as
    /// tour failure, never as a system error.
    pub fn select<R: Rng>(
        &self,
        graph: &RouteGraph,
        trails: &TrailField,
        current: NodeId,
        visited: &[bool],
        rng: &mut R,
    ) -> Result<NodeId, NoCandidates> {
        let mut candidates = Vec::new();
        let mut weights = Vec::new();

        for e in graph.neighbors(current) {
            if visited[e.to] {
                continue;
            }
            let tau = trails.level(e.edge);
            let eta = 1.0 / e.distance;
            candidates.push(e.to);
            weights.push(tau.powf(self.alpha) * eta.powf(self.beta));
        }

        if candidates.is_empty() {
            return Err(NoCandidates(current));
        }

        let idx = roulette(&weights, rng).expect("candidate set is non-empty");
        Ok(candidates[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_roulette_empty() {
        assert_eq!(roulette(&[], &mut rng(42)), None);
    }

    #[test]
    fn test_roulette_single() {
        assert_eq!(roulette(&[3.0], &mut rng(42)), Some(0));
    }

    #[test]
    fn test_roulette_favors_heavy_weights() {
        let weights = [1.0, 10.0, 1.0];
        let mut r = rng(42);
        let mut counts = [0u32; 3];
        let n = 10000;
        for _ in 0..n {
            counts[roulette(&weights, &mut r).unwrap()] += 1;
        }
        assert!(
            counts[1] > counts[0] + counts[2],
            "heavy index should dominate: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_zero_weights_fall_back_to_uniform() {
        // Documented fallback: all-zero weights sample uniformly.
        let weights = [0.0, 0.0, 0.0, 0.0];
        let mut r = rng(42);
        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[roulette(&weights, &mut r).unwrap()] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_never_picks_zero_among_positive() {
        let weights = [0.0, 1.0];
        let mut r = rng(42);
        for _ in 0..1000 {
            assert_eq!(roulette(&weights, &mut r), Some(1));
        }
    }

    fn diamond() -> (RouteGraph, TrailField) {
        // 0 connects to 1 (short) and 2 (long), both reach 3.
        let graph = RouteGraph::from_edges(
            4,
            &[(0, 1, 1.0), (0, 2, 10.0), (1, 3, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let trails = TrailField::for_graph(&graph, 0.1);
        (graph, trails)
    }

    #[test]
    fn test_select_skips_visited() {
        let (graph, trails) = diamond();
        let policy = SelectionPolicy::new(1.0, 2.0);
        let mut visited = vec![false; 4];
        visited[0] = true;
        visited[1] = true;

        let mut r = rng(42);
        for _ in 0..100 {
            let next = policy.select(&graph, &trails, 0, &visited, &mut r).unwrap();
            assert_eq!(next, 2, "only node 2 is unvisited");
        }
    }

    #[test]
    fn test_select_dead_end() {
        let (graph, trails) = diamond();
        let policy = SelectionPolicy::new(1.0, 2.0);
        let visited = vec![true; 4];

        let err = policy
            .select(&graph, &trails, 0, &visited, &mut rng(42))
            .unwrap_err();
        assert_eq!(err, NoCandidates(0));
    }

    #[test]
    fn test_beta_biases_toward_short_edges() {
        let (graph, trails) = diamond();
        // Equal trails; high beta should strongly prefer the 1.0 edge
        // over the 10.0 edge.
        let policy = SelectionPolicy::new(1.0, 3.0);
        let mut visited = vec![false; 4];
        visited[0] = true;

        let mut r = rng(42);
        let mut short = 0;
        let n = 10000;
        for _ in 0..n {
            if policy.select(&graph, &trails, 0, &visited, &mut r).unwrap() == 1 {
                short += 1;
            }
        }
        assert!(short > 9500, "expected short edge to dominate, got {short}/{n}");
    }

    #[test]
    fn test_alpha_biases_toward_strong_trails() {
        let (graph, mut trails) = diamond();
        // Distance ignored (beta = 0); node 2's edge carries more trail.
        trails.set(graph.edge(0, 2).unwrap(), 5.0);
        let policy = SelectionPolicy::new(1.0, 0.0);
        let mut visited = vec![false; 4];
        visited[0] = true;

        let mut r = rng(42);
        let mut strong = 0;
        let n = 10000;
        for _ in 0..n {
            if policy.select(&graph, &trails, 0, &visited, &mut r).unwrap() == 2 {
                strong += 1;
            }
        }
        assert!(
            strong > 9000,
            "expected strong trail to dominate, got {strong}/{n}"
        );
    }

    #[test]
    fn test_zero_exponents_are_uniform() {
        let (graph, mut trails) = diamond();
        trails.set(graph.edge(0, 2).unwrap(), 100.0);
        let policy = SelectionPolicy::new(0.0, 0.0);
        let mut visited = vec![false; 4];
        visited[0] = true;

        let mut r = rng(42);
        let mut counts = [0u32; 2];
        let n = 10000;
        for _ in 0..n {
            match policy.select(&graph, &trails, 0, &visited, &mut r).unwrap() {
                1 => counts[0] += 1,
                2 => counts[1] += 1,
                other => panic!("unexpected candidate {other}"),
            }
        }
        for &c in &counts {
            assert!(c > 4000, "expected near-uniform split, got {counts:?}");
        }
    }

    proptest! {
        /// The sampler always returns an in-range index for non-empty
        /// weight slices, whatever the weights.
        #[test]
        fn prop_roulette_index_in_range(
            weights in proptest::collection::vec(0.0f64..100.0, 1..16),
            seed in 0u64..1000,
        ) {
            let idx = roulette(&weights, &mut rng(seed)).unwrap();
            prop_assert!(idx < weights.len());
        }
    }
}
