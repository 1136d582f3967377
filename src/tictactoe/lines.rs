//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Find the winner, if any, by scanning the eight lines in fixed order.
    ///
    /// Returns the owner of the first line whose three cells hold the same
    /// non-empty marker. Legal play admits at most one winner, so the fixed
    /// scan order only matters for determinism, not for the result.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        for line in &WINNING_LINES {
            let first = cells[line[0]];
            if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
                return first.to_player();
            }
        }
        None
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        Self::winner(cells) == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_winner_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_no_winner() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&cells), None);

        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_double_line_same_player() {
        // Adversarially constructed: X completes both the top row and the
        // left column. Still a single unambiguous winner.
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_full_board_diagonal_scan() {
        // X at every even index, O at every odd index. Rows and columns are
        // mixed; the first matching triple in scan order is the main
        // diagonal (0, 4, 8).
        let cells: [Cell; 9] = std::array::from_fn(|i| {
            if i.is_multiple_of(2) { Cell::X } else { Cell::O }
        });

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }
}
