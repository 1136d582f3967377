//! Interactive human-vs-agent game
//!
//! Runs the same per-ply state machine as self-play training, pausing at the
//! human's turns for a validated cell index. The session is generic over its
//! input and output streams so game flows can be driven from tests.

use std::io::{BufRead, Write};

use crate::{
    Error, Result,
    q_learning::QLearningAgent,
    tictactoe::{BoardState, GameStatus, Player},
};

/// One human-vs-agent game over arbitrary I/O streams
///
/// The agent holds X and moves first; the human holds O. Learning stays on
/// during play: every ply, the human's included, is scored into the agent's
/// table exactly as during training.
pub struct InteractiveGame<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveGame<R, W> {
    /// Create a session over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Get the output stream back (for inspecting captured transcripts)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one game to completion and return the terminal status
    ///
    /// # Errors
    ///
    /// Returns an error if a stream fails or the input ends while a move is
    /// still expected. Invalid human input is not an error; it is rejected
    /// with a message and re-prompted without limit.
    pub fn run(&mut self, agent: &mut QLearningAgent) -> Result<GameStatus> {
        let mut board = BoardState::new();

        loop {
            self.render(&board)?;

            let mover = board.to_move;
            let action = match mover {
                Player::X => {
                    writeln!(self.output, "AI's turn:")?;
                    let action = agent.select_move(&board)?;
                    writeln!(self.output, "AI chooses position {action}")?;
                    action
                }
                Player::O => self.prompt_for_move(&board)?,
            };

            board = board.make_move(action)?;

            match agent.learn(&board, action, mover) {
                GameStatus::Ongoing => {}
                terminal => {
                    self.render(&board)?;
                    self.announce(terminal)?;
                    return Ok(terminal);
                }
            }
        }
    }

    /// Read a validated move for the human player.
    ///
    /// Rejection messages distinguish the three failure shapes: lines that
    /// do not parse as an integer, integers outside 0-8, and occupied
    /// cells.
    fn prompt_for_move(&mut self, board: &BoardState) -> Result<usize> {
        loop {
            write!(self.output, "Your turn! Enter a position (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputEnded);
            }

            let Ok(value) = line.trim().parse::<i64>() else {
                writeln!(
                    self.output,
                    "Invalid input! Please enter a number between 0 and 8."
                )?;
                continue;
            };

            if !(0..=8).contains(&value) {
                writeln!(
                    self.output,
                    "Invalid position! Choose a position between 0 and 8."
                )?;
                continue;
            }

            let position = value as usize;
            if !board.is_empty(position) {
                writeln!(self.output, "That position is already taken. Try again.")?;
                continue;
            }

            return Ok(position);
        }
    }

    /// Print the 3x3 grid with column and row separators
    fn render(&mut self, board: &BoardState) -> Result<()> {
        writeln!(self.output)?;
        for (i, row) in board.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(self.output, "--+---+--")?;
            }
            writeln!(
                self.output,
                "{} | {} | {}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Win(Player::X) => writeln!(self.output, "The AI wins!")?,
            GameStatus::Win(Player::O) => writeln!(self.output, "You win!")?,
            GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
            GameStatus::Ongoing => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::q_learning::Hyperparameters;

    fn session(input: &str) -> InteractiveGame<Cursor<String>, Vec<u8>> {
        InteractiveGame::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_prompt_rejects_garbage_and_out_of_range_before_accepting() {
        let mut game = session("abc\n9\n0\n");
        let board = BoardState::new();

        let action = game.prompt_for_move(&board).unwrap();
        assert_eq!(action, 0);

        let transcript = String::from_utf8(game.into_output()).unwrap();
        assert!(transcript.contains("Invalid input!"));
        assert!(transcript.contains("Invalid position!"));
    }

    #[test]
    fn test_prompt_rejects_negative_numbers_as_out_of_range() {
        let mut game = session("-3\n4\n");
        let board = BoardState::new();

        assert_eq!(game.prompt_for_move(&board).unwrap(), 4);

        let transcript = String::from_utf8(game.into_output()).unwrap();
        assert!(transcript.contains("Invalid position!"));
    }

    #[test]
    fn test_prompt_rejects_occupied_cell() {
        let mut game = session("0\n5\n");
        let board = BoardState::from_string("X........").unwrap();

        assert_eq!(game.prompt_for_move(&board).unwrap(), 5);

        let transcript = String::from_utf8(game.into_output()).unwrap();
        assert!(transcript.contains("already taken"));
    }

    #[test]
    fn test_prompt_errors_when_input_ends() {
        let mut game = session("");
        let board = BoardState::new();

        assert!(matches!(
            game.prompt_for_move(&board),
            Err(Error::InputEnded)
        ));
    }

    #[test]
    fn test_session_plays_to_a_terminal_status() {
        // The script offers every cell once in order; occupied cells are
        // rejected and the next line is consumed, so the game always finds
        // a legal human move and must terminate within nine plies.
        let mut agent = QLearningAgent::new(Hyperparameters::default()).with_seed(3);
        let mut game = session("0\n1\n2\n3\n4\n5\n6\n7\n8\n");

        let status = game.run(&mut agent).unwrap();
        assert!(status.is_terminal());

        let transcript = String::from_utf8(game.into_output()).unwrap();
        assert!(transcript.contains("AI chooses position"));
        assert!(
            transcript.contains("wins!") || transcript.contains("draw!"),
            "missing final announcement in transcript: {transcript}"
        );
        // Learning stayed on during the game
        assert!(!agent.q_table().is_empty());
    }
}
