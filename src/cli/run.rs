//! Run command - train by self-play, then play one interactive game

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    pipeline::{InteractiveGame, TrainingConfig, TrainingPipeline},
    q_learning::{Hyperparameters, QLearningAgent},
};

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent by self-play, then play against it")]
pub struct RunArgs {
    /// Number of self-play training episodes
    #[arg(long, short = 'e', default_value_t = 10_000)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the training progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let mut agent = QLearningAgent::new(Hyperparameters::default());

    println!(
        "Training on {} self-play episodes...",
        output::format_number(args.episodes)
    );
    let config = TrainingConfig {
        num_episodes: args.episodes,
        seed: args.seed,
    };
    let result = TrainingPipeline::new(config)
        .with_progress(!args.no_progress)
        .run(&mut agent)?;

    let episodes = output::format_number(result.total_episodes);
    let states = output::format_number(agent.q_table().len());
    let wins = format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0);
    let draws = format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0);
    let losses = format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0);

    output::print_section("Training summary");
    output::print_stats_table(&[
        ("Episodes", episodes.as_str()),
        ("States learned", states.as_str()),
        ("X wins", wins.as_str()),
        ("Draws", draws.as_str()),
        ("O wins", losses.as_str()),
    ]);

    println!("\nAI vs Human: you are O, the AI is X and moves first.");
    let stdin = io::stdin();
    let mut game = InteractiveGame::new(stdin.lock(), io::stdout());
    game.run(&mut agent)?;

    Ok(())
}
