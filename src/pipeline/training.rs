//! Self-play training pipeline

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    q_learning::QLearningAgent,
    tictactoe::{BoardState, GameStatus, Player},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub num_episodes: usize,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_episodes: 10_000,
            seed: None,
        }
    }
}

/// Result of a training run
///
/// Episodes are played only to populate the Q-table; the tally below is the
/// one artifact kept from the discarded games. Wins and losses are counted
/// from X's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total episodes played
    pub total_episodes: usize,

    /// Number of X wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of O wins
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(total_episodes: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_episodes > 0 {
                count as f64 / total_episodes as f64
            } else {
                0.0
            }
        };

        Self {
            total_episodes,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

/// Training pipeline: runs self-play episodes against a single shared table
///
/// Both sides of every episode select moves through the same agent, so the
/// table accumulates values for X and O plies alike.
pub struct TrainingPipeline {
    config: TrainingConfig,
    progress: bool,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Run training with the given agent
    pub fn run(&mut self, agent: &mut QLearningAgent) -> Result<TrainingResult> {
        if let Some(seed) = self.config.seed {
            agent.set_seed(seed);
        }

        let progress_bar = self.progress.then(|| {
            let pb = ProgressBar::new(self.config.num_episodes as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (W:{msg})")
                    .expect("Invalid progress bar template")
                    .progress_chars("=>-"),
            );
            pb
        });

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for episode in 0..self.config.num_episodes {
            let status = play_episode(agent)?;

            match status {
                GameStatus::Win(Player::X) => wins += 1,
                GameStatus::Win(Player::O) => losses += 1,
                GameStatus::Draw => draws += 1,
                GameStatus::Ongoing => unreachable!("episode ended in a non-terminal status"),
            }

            if let Some(pb) = &progress_bar {
                pb.set_position(episode as u64 + 1);
                pb.set_message(format!("{wins} D:{draws} L:{losses}"));
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!("{wins} D:{draws} L:{losses}"));
        }

        Ok(TrainingResult::new(
            self.config.num_episodes,
            wins,
            draws,
            losses,
        ))
    }
}

/// Play one self-play episode to its terminal status
///
/// The per-ply cycle is the same state machine the interactive game runs:
/// check status, select a move for the side to play, apply it, score the
/// ply. Terminal status is evaluated strictly before the next selection, so
/// a full or decided board never reaches the policy.
pub fn play_episode(agent: &mut QLearningAgent) -> Result<GameStatus> {
    let mut board = BoardState::new();

    loop {
        let mover = board.to_move;
        let action = agent.select_move(&board)?;
        board = board.make_move(action)?;

        match agent.learn(&board, action, mover) {
            GameStatus::Ongoing => {}
            terminal => return Ok(terminal),
        }
    }
}
