//! qttt CLI - Tabular Q-learning Tic-Tac-Toe
//!
//! Trains an agent by self-play for a configurable number of episodes, then
//! starts one interactive game against it on the console.

use anyhow::Result;
use clap::Parser;

use qttt::cli::run::RunArgs;

#[derive(Parser)]
#[command(name = "qttt")]
#[command(version, about = "Tabular Q-learning Tic-Tac-Toe agent", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    qttt::cli::run::execute(cli.args)
}
