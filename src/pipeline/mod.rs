//! Game loop drivers
//!
//! Both operating modes run the same per-ply state machine: select a move
//! for the side to play, apply it, score the resulting position into the
//! Q-table, and stop on a terminal status. [`training`] runs it silently
//! over many self-play episodes; [`interactive`] runs it once against a
//! human.

pub mod interactive;
pub mod training;

pub use interactive::InteractiveGame;
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult, play_episode};
