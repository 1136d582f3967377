//! Tabular Q-learning
//!
//! This module implements off-policy temporal difference (TD) control over
//! exact board snapshots. The table maps each visited snapshot to one value
//! per cell; unseen snapshots read as zeros and are only materialized on the
//! first write.
//!
//! ## Update rule
//!
//! Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
//!
//! The driver scores every ply, terminal plies included, and passes the
//! post-move snapshot as both s and s', so terminal values bootstrap from
//! the terminal snapshot's own array rather than a forced zero.

pub mod agent;
pub mod q_table;

// Public re-exports
pub use agent::{Hyperparameters, QLearningAgent};
pub use q_table::{QTable, StateKey};
