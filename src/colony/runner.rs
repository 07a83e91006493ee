//! Colony execution loop.
//!
//! [`ColonyRunner`] drives the generation protocol: spawn agents, collect
//! tours, then — inside a single barrier phase while no agent is running —
//! evaporate, deposit, and re-clamp the trail field, update the best-known
//! solution, and consult the convergence monitor. Tour building is the
//! only parallel phase; everything the scheduler owns (trail field, best
//! solution, counters) is mutated single-threaded between generations, so
//! no agent ever observes a partially updated trail state.

use super::agent::{Agent, Tour};
use super::config::ColonyConfig;
use super::convergence::{ConvergenceMonitor, StopReason};
use super::selection::SelectionPolicy;
use crate::graph::{RouteGraph, TrailField};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal status of a colony run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// At least one tour succeeded; `best_tour` holds the cheapest.
    Solved,
    /// The run completed without a single successful tour.
    NoSolutionFound,
    /// The run aborted early on the no-viable-route signal
    /// (only with [`ColonyConfig::abort_on_no_route`]).
    NoViableRoute,
    /// External cancellation stopped the run at a generation boundary.
    Cancelled,
}

/// Per-generation summary handed to the observer hook.
///
/// Transient by design: the engine keeps only the convergence counters,
/// never a history of these records.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Costs of this generation's succeeded tours.
    pub tour_costs: Vec<f64>,
    /// Number of succeeded tours.
    pub successes: usize,
    /// Number of failed attempts (dead ends or exhausted budgets).
    pub failures: usize,
    /// Cheapest cost of this generation, if any tour succeeded.
    pub generation_best: Option<f64>,
    /// Best-known cost after this generation; `INFINITY` while none.
    pub best_cost: f64,
}

/// Result of a colony run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyResult {
    /// Why and how the run ended.
    pub status: RunStatus,

    /// The lowest-cost complete tour observed across all generations.
    pub best_tour: Option<Tour>,

    /// Cost of the best tour; `INFINITY` if none succeeded.
    pub best_cost: f64,

    /// 1-based generation at which the best tour was found.
    pub best_found_at: Option<usize>,

    /// Generations completed.
    pub iterations: usize,

    /// Whether the run stopped on the stall limit.
    pub stalled: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// 1-based generation at which the no-viable-route signal fired.
    pub no_viable_route_at: Option<usize>,

    /// Total failed attempts across the run (diagnostics only).
    pub failed_attempts: usize,

    /// Best-known cost after each generation.
    pub cost_history: Vec<f64>,

    /// Final trail field, for inspection or warm restarts.
    pub trails: TrailField,
}

/// Executes the colony generation loop.
///
/// # Usage
///
/// ```
/// use stigroute::colony::{ColonyConfig, ColonyRunner};
/// use stigroute::graph::RouteGraph;
///
/// let graph = RouteGraph::from_edges(3, &[(0, 1, 2.0), (1, 2, 2.0)]).unwrap();
/// let config = ColonyConfig::new(0, 2).with_seed(42);
/// let result = ColonyRunner::run(&graph, &config);
/// assert_eq!(result.best_cost, 4.0);
/// ```
pub struct ColonyRunner;

impl ColonyRunner {
    /// Runs the colony to termination.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`ColonyConfig::validate`] first to get a descriptive error) or if
    /// the origin/destination lie outside the graph's node set.
    pub fn run(graph: &RouteGraph, config: &ColonyConfig) -> ColonyResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// Cancellation is cooperative and honored only at generation
    /// boundaries: an in-flight generation always completes its agents and
    /// its trail update, keeping the trail field consistent.
    pub fn run_with_cancel(
        graph: &RouteGraph,
        config: &ColonyConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ColonyResult {
        Self::run_with_observer(graph, config, cancel, |_| {})
    }

    /// Runs the colony, invoking `on_generation` with a summary after
    /// every completed generation.
    pub fn run_with_observer<F>(
        graph: &RouteGraph,
        config: &ColonyConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_generation: F,
    ) -> ColonyResult
    where
        F: FnMut(&GenerationStats),
    {
        config.validate().expect("invalid ColonyConfig");
        assert!(
            config.origin < graph.node_count(),
            "origin node {} outside graph node set",
            config.origin
        );
        assert!(
            config.destination < graph.node_count(),
            "destination node {} outside graph node set",
            config.destination
        );

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let policy = SelectionPolicy::new(config.alpha, config.beta);
        let mut trails = TrailField::for_graph(graph, config.trail_floor);
        let mut monitor = ConvergenceMonitor::new(
            config.iteration_cap,
            config.stall_limit,
            config.effective_no_route_limit(),
            config.abort_on_no_route,
        );

        let mut best_tour: Option<Tour> = None;
        let mut cost_history = Vec::with_capacity(config.iteration_cap);
        let mut failed_attempts = 0usize;
        let mut cancelled = false;
        let mut stop = None;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // 1-2. Independent tour building. One sub-seed per agent,
            // drawn up front from the master RNG, makes the outcome
            // identical whether agents run sequentially or on the pool.
            let seeds: Vec<u64> =
                (0..config.population_size).map(|_| rng.random()).collect();
            let build = |&seed: &u64| -> Option<Tour> {
                let mut agent_rng = StdRng::seed_from_u64(seed);
                Agent::new(
                    graph,
                    &trails,
                    policy,
                    config.origin,
                    config.destination,
                    config.step_budget,
                )
                .run(&mut agent_rng)
            };
            let outcomes: Vec<Option<Tour>> = if config.parallel {
                seeds.par_iter().map(build).collect()
            } else {
                seeds.iter().map(build).collect()
            };

            // 3. Partition: failures are counted, then discarded.
            let mut tours = Vec::new();
            for outcome in outcomes {
                match outcome {
                    Some(tour) => tours.push(tour),
                    None => failed_attempts += 1,
                }
            }

            // 4-6. Barrier phase: evaporate, deposit, re-clamp. No agent
            // is alive here, so the update is atomic from their view.
            trails.evaporate(config.evaporation_rate);
            for tour in &tours {
                let amount = config.deposit_constant / tour.cost();
                for (from, to) in tour.edges() {
                    let edge = graph
                        .edge(from, to)
                        .expect("tour edges exist in the graph");
                    trails.deposit(edge, amount);
                }
            }
            if config.elitist_weight > 0.0 {
                // Elitist extension: extra deposit on the best tour known
                // *before* this generation's results are folded in.
                if let Some(ref best) = best_tour {
                    let amount =
                        config.elitist_weight * config.deposit_constant / best.cost();
                    for (from, to) in best.edges() {
                        let edge = graph
                            .edge(from, to)
                            .expect("best tour edges exist in the graph");
                        trails.deposit(edge, amount);
                    }
                }
            }
            trails.clamp_to_floor();

            // 7. Best-known update: strict improvement only.
            let generation_best = tours
                .iter()
                .min_by(|a, b| {
                    a.cost()
                        .partial_cmp(&b.cost())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .cloned();
            if let Some(ref candidate) = generation_best {
                let current = best_tour.as_ref().map_or(f64::INFINITY, Tour::cost);
                if candidate.cost() < current {
                    best_tour = Some(candidate.clone());
                }
            }

            // 8. Report and decide.
            let stats = GenerationStats {
                generation: monitor.generations() + 1,
                tour_costs: tours.iter().map(Tour::cost).collect(),
                successes: tours.len(),
                failures: config.population_size - tours.len(),
                generation_best: generation_best.as_ref().map(Tour::cost),
                best_cost: best_tour.as_ref().map_or(f64::INFINITY, Tour::cost),
            };
            on_generation(&stats);

            stop = monitor.observe(stats.generation_best);
            cost_history.push(monitor.best_cost());
            if stop.is_some() {
                break;
            }
        }

        let status = if cancelled {
            RunStatus::Cancelled
        } else if matches!(stop, Some(StopReason::NoViableRoute)) {
            RunStatus::NoViableRoute
        } else if best_tour.is_some() {
            RunStatus::Solved
        } else {
            RunStatus::NoSolutionFound
        };

        ColonyResult {
            status,
            best_cost: monitor.best_cost(),
            best_found_at: monitor.best_found_at(),
            iterations: monitor.generations(),
            stalled: matches!(stop, Some(StopReason::Stalled)),
            cancelled,
            no_viable_route_at: monitor.no_viable_route_at(),
            failed_attempts,
            cost_history,
            best_tour,
            trails,
        }
    }
}
