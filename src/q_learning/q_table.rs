//! Q-table implementation for temporal difference learning

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{BoardState, Cell};

/// Q-table lookup key: an immutable snapshot of the nine board cells.
///
/// Identity is structural, so two snapshots of equal cell sequences hit the
/// same entry. The mover is not part of the key; both sides of self-play
/// read and write the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey([Cell; 9]);

impl StateKey {
    /// Get the snapshot's cells
    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }
}

impl From<&BoardState> for StateKey {
    fn from(state: &BoardState) -> Self {
        StateKey(state.cells)
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

/// Q-table mapping board snapshots to per-cell action values
///
/// States the table has never seen read as all-zero value arrays. The read
/// path never inserts; entries are created on first write, so probing a
/// hypothetical next state leaves the table unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Action values: state snapshot -> one value per cell index
    values: HashMap<StateKey, [f64; 9]>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QTable {
    /// Create a new Q-table
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get the action-value array for a state, defaulting to zeros
    ///
    /// Does not insert the default; see [`set`](Self::set) for the write
    /// path.
    pub fn action_values(&self, state: &StateKey) -> [f64; 9] {
        self.values.get(state).copied().unwrap_or([0.0; 9])
    }

    /// Get the value of a single state-action pair
    pub fn value(&self, state: &StateKey, action: usize) -> f64 {
        self.action_values(state)[action]
    }

    /// Set the value of a single state-action pair
    ///
    /// Inserts the state's zero-initialized array if absent, then overwrites
    /// the one slot.
    pub fn set(&mut self, state: StateKey, action: usize, value: f64) {
        self.values.entry(state).or_insert([0.0; 9])[action] = value;
    }

    /// Get the maximum value over all nine slots of a state
    ///
    /// The maximum deliberately ranges over every slot, occupied cells
    /// included, matching the bootstrap term of the update rule.
    pub fn max_value(&self, state: &StateKey) -> f64 {
        self.action_values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Select the greedy action from the legal actions
    ///
    /// Ties break toward the first maximizing index in the given order;
    /// callers pass legal actions in ascending index order, so an all-zero
    /// tie resolves to the lowest legal index.
    ///
    /// # Panics
    ///
    /// Panics if `legal_actions` is empty. Callers uphold the invariant
    /// that terminal boards never reach action selection.
    pub fn greedy_action(&self, state: &StateKey, legal_actions: &[usize]) -> usize {
        let values = self.action_values(state);
        let mut best = legal_actions[0];
        for &action in &legal_actions[1..] {
            if values[action] > values[best] {
                best = action;
            }
        }
        best
    }

    /// Q-learning update: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// The future-value term bootstraps from `next_state`'s stored (or
    /// lazily zero) array even when `next_state` is terminal; the driver
    /// passes the post-move snapshot for both arguments.
    pub fn q_learning_update(
        &mut self,
        state: StateKey,
        action: usize,
        reward: f64,
        next_state: &StateKey,
    ) {
        let current_q = self.value(&state, action);
        let max_next_q = self.max_value(next_state);
        let td_target = reward + self.discount_factor * max_next_q;
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(state, action, new_q);
    }

    /// Get the number of states stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether any state has been written yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
