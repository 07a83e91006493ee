//! Colony scheduling: selection policy, tour-building agents, the
//! generation loop, and the convergence contract.
//!
//! Agents coordinate only through the shared trail field — there is no
//! direct agent-to-agent messaging and no central planner. Each
//! generation the scheduler spawns a population of independent agents,
//! collects their tours, then updates the trail field (evaporate, deposit,
//! re-clamp) in a single barrier phase before the next generation starts.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

mod agent;
mod config;
mod convergence;
mod runner;
mod selection;

pub use agent::{Agent, AgentState, Tour};
pub use config::ColonyConfig;
pub use convergence::{ConvergenceMonitor, StopReason};
pub use runner::{ColonyResult, ColonyRunner, GenerationStats, RunStatus};
pub use selection::{roulette, SelectionPolicy};
