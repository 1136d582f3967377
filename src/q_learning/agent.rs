//! Tabular Q-learning agent
//!
//! The agent couples a [`QTable`] with ε-greedy action selection and applies
//! the temporal difference update after every ply it is shown.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    q_learning::q_table::{QTable, StateKey},
    tictactoe::{BoardState, GameStatus, Player},
};

/// Learning constants, fixed for the lifetime of a process run
///
/// ε is not annealed: the same exploration rate drives self-play training
/// and the interactive game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Exploration rate ε
    pub epsilon: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.9,
            epsilon: 0.2,
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Q-learning agent (off-policy TD control)
///
/// One agent serves both sides of self-play: action values are keyed by the
/// board snapshot alone, and the reward of a scored ply is taken from the
/// mover's perspective.
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    q_table: QTable,
    epsilon: f64,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl QLearningAgent {
    /// Create a new agent with an empty Q-table
    pub fn new(params: Hyperparameters) -> Self {
        Self {
            q_table: QTable::new(params.learning_rate, params.discount_factor),
            epsilon: params.epsilon,
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    /// Seed the agent's RNG for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_seed(seed);
        self
    }

    /// Re-seed the agent's RNG in place
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// Get the learned table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// ε-greedy action selection
    fn select_action_epsilon_greedy(&mut self, state: &StateKey, legal_moves: &[usize]) -> usize {
        if self.rng.random::<f64>() < self.epsilon {
            // Explore: random legal action
            *legal_moves.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: greedy action based on Q-values
            self.q_table.greedy_action(state, legal_moves)
        }
    }

    /// Select a move for the given board state.
    ///
    /// Looks up the pre-move snapshot and picks ε-greedily among the empty
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal moves are available. The driver checks
    /// terminal status before asking for a move, so a full or decided board
    /// reaching this point is a driver bug, not a user condition.
    pub fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        let legal_moves = state.legal_moves();
        if legal_moves.is_empty() {
            return Err(crate::error::Error::NoValidMoves);
        }

        let key = StateKey::from(state);
        Ok(self.select_action_epsilon_greedy(&key, &legal_moves))
    }

    /// Score the ply that produced `after` and apply the TD update.
    ///
    /// `action` is the cell just taken by `mover`. The reward is +1 when the
    /// ply won the game for its mover, -1 when the position is a win for the
    /// other side, and 0 for draws and ongoing positions. The post-move
    /// snapshot is passed as both the updated state and the bootstrap state,
    /// so a terminal ply bootstraps from the terminal position's own
    /// (lazily zero) values.
    ///
    /// Returns the evaluated status so the driver can branch on it.
    pub fn learn(&mut self, after: &BoardState, action: usize, mover: Player) -> GameStatus {
        let status = after.status();
        let reward = match status {
            GameStatus::Win(winner) if winner == mover => 1.0,
            GameStatus::Win(_) => -1.0,
            GameStatus::Draw | GameStatus::Ongoing => 0.0,
        };

        let snapshot = StateKey::from(after);
        self.q_table
            .q_learning_update(snapshot, action, reward, &snapshot);
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy_params() -> Hyperparameters {
        Hyperparameters {
            epsilon: 0.0,
            ..Hyperparameters::default()
        }
    }

    #[test]
    fn test_default_hyperparameters() {
        let params = Hyperparameters::default();
        assert_eq!(params.learning_rate, 0.1);
        assert_eq!(params.discount_factor, 0.9);
        assert_eq!(params.epsilon, 0.2);
    }

    #[test]
    fn test_greedy_agent_picks_highest_valued_move() {
        let mut agent = QLearningAgent::new(greedy_params());
        let board = BoardState::new();
        let key = StateKey::from(&board);
        agent.q_table.set(key, 6, 0.7);
        agent.q_table.set(key, 2, 0.3);

        assert_eq!(agent.select_move(&board).unwrap(), 6);
    }

    #[test]
    fn test_greedy_tie_breaks_to_lowest_legal_index() {
        let mut agent = QLearningAgent::new(greedy_params());
        // Empty table: every legal action ties at zero
        let board = BoardState::from_string("X........").unwrap();

        assert_eq!(agent.select_move(&board).unwrap(), 1);
    }

    #[test]
    fn test_exploring_agent_stays_legal() {
        let params = Hyperparameters {
            epsilon: 1.0,
            ..Hyperparameters::default()
        };
        let mut agent = QLearningAgent::new(params).with_seed(7);
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        let legal = board.legal_moves();

        for _ in 0..50 {
            let action = agent.select_move(&board).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_select_move_on_full_board_errors() {
        let mut agent = QLearningAgent::new(greedy_params());
        let board = BoardState::from_string("XOXOXOXOX").unwrap();

        assert!(matches!(
            agent.select_move(&board),
            Err(crate::error::Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_seeded_agents_agree() {
        let params = Hyperparameters::default();
        let mut first = QLearningAgent::new(params).with_seed(42);
        let mut second = QLearningAgent::new(params).with_seed(42);
        let board = BoardState::new();

        for _ in 0..20 {
            assert_eq!(
                first.select_move(&board).unwrap(),
                second.select_move(&board).unwrap()
            );
        }
    }

    #[test]
    fn test_learn_scores_winning_ply_for_mover() {
        let mut agent = QLearningAgent::new(greedy_params());
        // X just completed the top row with a move at 2
        let after = BoardState::from_string("XXXOO....").unwrap();

        let status = agent.learn(&after, 2, Player::X);

        assert_eq!(status, GameStatus::Win(Player::X));
        // new = 0 + 0.1 * (1.0 + 0.9 * 0.0 - 0.0)
        let key = StateKey::from(&after);
        assert!((agent.q_table().value(&key, 2) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_learn_on_ongoing_ply_keeps_zero_values_but_inserts() {
        let mut agent = QLearningAgent::new(greedy_params());
        let after = BoardState::from_string("X........").unwrap();

        let status = agent.learn(&after, 0, Player::X);

        assert_eq!(status, GameStatus::Ongoing);
        // Zero reward against an all-zero bootstrap leaves the value at
        // zero, but the write still creates the entry
        assert_eq!(agent.q_table().len(), 1);
        let key = StateKey::from(&after);
        assert_eq!(agent.q_table().value(&key, 0), 0.0);
    }
}
