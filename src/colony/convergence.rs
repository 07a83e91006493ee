//! Run-level stopping contract.
//!
//! The monitor observes one cost summary per generation and decides when
//! the scheduler should stop: a hard generation cap, a stall limit on the
//! best-known cost, or (optionally) the no-viable-route signal raised by
//! repeated all-failure generations.

/// Why the scheduler stopped iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured generation cap was reached.
    CapReached,
    /// The best-known cost did not improve for `stall_limit` consecutive
    /// generations.
    Stalled,
    /// Every generation so far failed entirely and the caller asked to
    /// abort on the no-viable-route signal.
    NoViableRoute,
}

/// Tracks best cost, stall, and all-failure streaks across generations.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    iteration_cap: usize,
    stall_limit: usize,
    no_route_limit: usize,
    abort_on_no_route: bool,
    generations: usize,
    best_cost: f64,
    best_found_at: Option<usize>,
    stall: usize,
    consecutive_failures: usize,
    ever_succeeded: bool,
    no_viable_route_at: Option<usize>,
}

impl ConvergenceMonitor {
    /// Creates a monitor. All limits are in generations and positive.
    pub fn new(
        iteration_cap: usize,
        stall_limit: usize,
        no_route_limit: usize,
        abort_on_no_route: bool,
    ) -> Self {
        Self {
            iteration_cap,
            stall_limit,
            no_route_limit,
            abort_on_no_route,
            generations: 0,
            best_cost: f64::INFINITY,
            best_found_at: None,
            stall: 0,
            consecutive_failures: 0,
            ever_succeeded: false,
            no_viable_route_at: None,
        }
    }

    /// Records one generation's best tour cost (`None` when every agent
    /// failed) and returns a stop reason if the run should end.
    ///
    /// Only a strict improvement resets the stall counter, so the tracked
    /// best cost is monotonically non-increasing.
    pub fn observe(&mut self, generation_best: Option<f64>) -> Option<StopReason> {
        self.generations += 1;

        match generation_best {
            Some(cost) => {
                self.consecutive_failures = 0;
                self.ever_succeeded = true;
                if cost < self.best_cost {
                    self.best_cost = cost;
                    self.best_found_at = Some(self.generations);
                    self.stall = 0;
                } else {
                    self.stall += 1;
                }
            }
            None => {
                // Stall measures lack of improvement on an existing best;
                // before any success the relevant signal is the failure
                // streak below, not a stall.
                if self.ever_succeeded {
                    self.stall += 1;
                }
                self.consecutive_failures += 1;
                // An all-failure streak only signals a missing route while
                // no tour has ever succeeded; after a success it is noise.
                if !self.ever_succeeded
                    && self.no_viable_route_at.is_none()
                    && self.consecutive_failures >= self.no_route_limit
                {
                    self.no_viable_route_at = Some(self.generations);
                }
            }
        }

        if self.abort_on_no_route && self.no_viable_route_at.is_some() {
            return Some(StopReason::NoViableRoute);
        }
        if self.generations >= self.iteration_cap {
            return Some(StopReason::CapReached);
        }
        if self.ever_succeeded && self.stall >= self.stall_limit {
            return Some(StopReason::Stalled);
        }
        None
    }

    /// Best cost observed so far; `INFINITY` while nothing succeeded.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// 1-based generation at which the best cost was found.
    pub fn best_found_at(&self) -> Option<usize> {
        self.best_found_at
    }

    /// Generations observed so far.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// 1-based generation at which the no-viable-route signal fired.
    pub fn no_viable_route_at(&self) -> Option<usize> {
        self.no_viable_route_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_iteration_cap() {
        let mut monitor = ConvergenceMonitor::new(3, 100, 100, false);
        assert_eq!(monitor.observe(Some(10.0)), None);
        assert_eq!(monitor.observe(Some(9.0)), None);
        assert_eq!(monitor.observe(Some(8.0)), Some(StopReason::CapReached));
        assert_eq!(monitor.generations(), 3);
    }

    #[test]
    fn test_stall_limit() {
        let mut monitor = ConvergenceMonitor::new(100, 2, 100, false);
        assert_eq!(monitor.observe(Some(10.0)), None);
        assert_eq!(monitor.observe(Some(10.0)), None);
        // Second consecutive non-improving generation.
        assert_eq!(monitor.observe(Some(11.0)), Some(StopReason::Stalled));
    }

    #[test]
    fn test_improvement_resets_stall() {
        let mut monitor = ConvergenceMonitor::new(100, 2, 100, false);
        monitor.observe(Some(10.0));
        monitor.observe(Some(10.0));
        assert_eq!(monitor.observe(Some(9.0)), None);
        assert_eq!(monitor.best_cost(), 9.0);
        assert_eq!(monitor.best_found_at(), Some(3));
    }

    #[test]
    fn test_best_cost_never_regresses() {
        let mut monitor = ConvergenceMonitor::new(100, 50, 100, false);
        monitor.observe(Some(10.0));
        monitor.observe(Some(20.0));
        monitor.observe(None);
        assert_eq!(monitor.best_cost(), 10.0);
        assert_eq!(monitor.best_found_at(), Some(1));
    }

    #[test]
    fn test_no_viable_route_signal() {
        let mut monitor = ConvergenceMonitor::new(100, 50, 3, false);
        monitor.observe(None);
        monitor.observe(None);
        assert_eq!(monitor.no_viable_route_at(), None);
        monitor.observe(None);
        assert_eq!(monitor.no_viable_route_at(), Some(3));
        // The run keeps going unless the caller opted into aborting.
        assert_eq!(monitor.observe(None), None);
    }

    #[test]
    fn test_no_viable_route_abort() {
        let mut monitor = ConvergenceMonitor::new(100, 50, 2, true);
        assert_eq!(monitor.observe(None), None);
        assert_eq!(monitor.observe(None), Some(StopReason::NoViableRoute));
    }

    #[test]
    fn test_all_failure_generations_do_not_stall() {
        // Without any success there is no best cost to stall on: the run
        // must reach the iteration cap, not the stall limit.
        let mut monitor = ConvergenceMonitor::new(10, 2, 100, false);
        for _ in 0..9 {
            assert_eq!(monitor.observe(None), None);
        }
        assert_eq!(monitor.observe(None), Some(StopReason::CapReached));
    }

    #[test]
    fn test_success_clears_failure_streak() {
        let mut monitor = ConvergenceMonitor::new(100, 50, 3, false);
        monitor.observe(None);
        monitor.observe(None);
        monitor.observe(Some(5.0));
        monitor.observe(None);
        monitor.observe(None);
        monitor.observe(None);
        // Streaks after a success never raise the signal.
        assert_eq!(monitor.no_viable_route_at(), None);
    }
}
