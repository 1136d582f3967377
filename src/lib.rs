//! Tabular Q-learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board and outcome logic
//! - A tabular Q-learning agent with ε-greedy action selection
//! - A self-play training pipeline with progress reporting
//! - An interactive human-vs-agent console game
//!
//! The learned table lives only for the process run: the binary trains and
//! then plays from the same in-memory agent.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod q_learning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use pipeline::{InteractiveGame, TrainingConfig, TrainingPipeline, TrainingResult};
pub use q_learning::{Hyperparameters, QLearningAgent, QTable, StateKey};
pub use tictactoe::{BoardState, Cell, GameStatus, Player};
