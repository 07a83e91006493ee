//! Colony configuration.

/// Run-level configuration for the colony scheduler.
///
/// Constructed with the origin/destination pair and tuned through the
/// `with_*` builders; everything else has workable defaults.
///
/// # Examples
///
/// ```
/// use stigroute::colony::ColonyConfig;
///
/// let config = ColonyConfig::new(0, 5)
///     .with_population_size(30)
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Node every agent starts from.
    pub origin: usize,

    /// Node a tour must reach to count as a success.
    pub destination: usize,

    /// Agents spawned per generation. Must be positive.
    pub population_size: usize,

    /// Trail influence exponent (>= 0).
    pub alpha: f64,

    /// Inverse-distance influence exponent (>= 0).
    pub beta: f64,

    /// Fraction of every trail that decays each generation. In (0, 1).
    pub evaporation_rate: f64,

    /// `Q` in the deposit rule `trail += Q / tour_cost`. Positive.
    pub deposit_constant: f64,

    /// Minimum (and initial) trail level. Small and strictly positive so
    /// no edge is ever permanently unselectable.
    pub trail_floor: f64,

    /// Per-agent step limit; bounds worst-case exploration. Positive.
    pub step_budget: usize,

    /// Hard cap on generations. Positive.
    pub iteration_cap: usize,

    /// Stop after this many consecutive generations without improvement
    /// to the best-known cost. Positive.
    pub stall_limit: usize,

    /// Consecutive all-failure generations (with no success ever) before
    /// the no-viable-route signal fires. `None` reuses `stall_limit`.
    pub no_route_limit: Option<usize>,

    /// Stop the run as soon as the no-viable-route signal fires, instead
    /// of completing the configured generations.
    pub abort_on_no_route: bool,

    /// Extra deposit weight on the best-known tour each generation
    /// (`weight * Q / best_cost` per edge). 0 disables the elitist
    /// extension; the baseline every-success-deposits rule always runs.
    pub elitist_weight: f64,

    /// Whether to build the generation's tours on the rayon pool.
    /// Sequential and parallel runs produce identical results.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one at random.
    pub seed: Option<u64>,
}

impl ColonyConfig {
    /// Creates a configuration for routing from `origin` to `destination`
    /// with default tuning.
    pub fn new(origin: usize, destination: usize) -> Self {
        Self {
            origin,
            destination,
            population_size: 20,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            deposit_constant: 100.0,
            trail_floor: 0.1,
            step_budget: 100,
            iteration_cap: 100,
            stall_limit: 25,
            no_route_limit: None,
            abort_on_no_route: false,
            elitist_weight: 0.0,
            parallel: false,
            seed: None,
        }
    }

    /// Sets the number of agents per generation.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the trail influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the inverse-distance influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the per-generation evaporation rate.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposit constant `Q`.
    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Sets the trail floor (doubles as the initial trail level).
    pub fn with_trail_floor(mut self, floor: f64) -> Self {
        self.trail_floor = floor;
        self
    }

    /// Sets the per-agent step budget.
    pub fn with_step_budget(mut self, steps: usize) -> Self {
        self.step_budget = steps;
        self
    }

    /// Sets the hard generation cap.
    pub fn with_iteration_cap(mut self, cap: usize) -> Self {
        self.iteration_cap = cap;
        self
    }

    /// Sets the stall limit.
    pub fn with_stall_limit(mut self, limit: usize) -> Self {
        self.stall_limit = limit;
        self
    }

    /// Sets the no-viable-route threshold.
    pub fn with_no_route_limit(mut self, limit: usize) -> Self {
        self.no_route_limit = Some(limit);
        self
    }

    /// Aborts the run as soon as the no-viable-route signal fires.
    pub fn with_abort_on_no_route(mut self, abort: bool) -> Self {
        self.abort_on_no_route = abort;
        self
    }

    /// Enables the elitist deposit extension with the given weight.
    pub fn with_elitist_weight(mut self, weight: f64) -> Self {
        self.elitist_weight = weight;
        self
    }

    /// Enables or disables parallel tour building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The effective no-viable-route threshold.
    pub fn effective_no_route_limit(&self) -> usize {
        self.no_route_limit.unwrap_or(self.stall_limit)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if !(self.alpha >= 0.0) {
            return Err(format!("alpha must be >= 0, got {}", self.alpha));
        }
        if !(self.beta >= 0.0) {
            return Err(format!("beta must be >= 0, got {}", self.beta));
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(format!(
                "evaporation_rate must be in (0, 1), got {}",
                self.evaporation_rate
            ));
        }
        if !(self.deposit_constant > 0.0) {
            return Err(format!(
                "deposit_constant must be positive, got {}",
                self.deposit_constant
            ));
        }
        if !(self.trail_floor > 0.0) {
            return Err(format!(
                "trail_floor must be positive, got {}",
                self.trail_floor
            ));
        }
        if self.step_budget == 0 {
            return Err("step_budget must be positive".into());
        }
        if self.iteration_cap == 0 {
            return Err("iteration_cap must be positive".into());
        }
        if self.stall_limit == 0 {
            return Err("stall_limit must be positive".into());
        }
        if self.no_route_limit == Some(0) {
            return Err("no_route_limit must be positive".into());
        }
        if !(self.elitist_weight >= 0.0) {
            return Err(format!(
                "elitist_weight must be >= 0, got {}",
                self.elitist_weight
            ));
        }
        Ok(())
    }
}
