use std::fmt::{self, Display, Formatter};

use crate::{
    cell_bit, column_base, has_four_in_line, is_column_full, Action, Value, NUM_COLUMNS, NUM_ROWS,
    TOP_ROW_MASK,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub p1_turn_to_move: bool,
    pub p1_piece_board: u64,
    pub p2_piece_board: u64,
}

impl engine::GameState for GameState {
    fn initial() -> Self {
        GameState {
            p1_turn_to_move: true,
            p1_piece_board: 0,
            p2_piece_board: 0,
        }
    }
}

impl GameState {
    pub fn player_to_move(&self) -> usize {
        if self.p1_turn_to_move {
            1
        } else {
            2
        }
    }

    /// Drops a piece for the player to move. The column must not be full.
    pub fn drop_piece(&self, column: usize) -> Self {
        let all_pieces = self.all_pieces();
        let dropped_piece = (all_pieces + column_base(column)) & !all_pieces;
        let mut p1_piece_board = self.p1_piece_board;
        let mut p2_piece_board = self.p2_piece_board;

        if self.p1_turn_to_move {
            p1_piece_board |= dropped_piece;
        } else {
            p2_piece_board |= dropped_piece;
        }

        Self {
            p1_turn_to_move: !self.p1_turn_to_move,
            p1_piece_board,
            p2_piece_board,
        }
    }

    /// Columns that are not yet full, in order from left to right.
    pub fn valid_actions(&self) -> Vec<Action> {
        let all_pieces = self.all_pieces();

        (1..=NUM_COLUMNS)
            .filter(|column| !is_column_full(all_pieces, *column))
            .map(|column| Action::DropPiece(column as u64))
            .collect()
    }

    pub fn is_valid_action(&self, action: &Action) -> bool {
        let column = action.column();
        (1..=NUM_COLUMNS).contains(&column) && !is_column_full(self.all_pieces(), column)
    }

    /// Utilities of both players if the game is over. Only the player who just moved can have
    /// completed a line. A full board without a line is a draw.
    pub fn is_terminal(&self) -> Option<Value> {
        if self.has_connected_4() {
            return Some(if self.p1_turn_to_move {
                Value::P2_WIN
            } else {
                Value::P1_WIN
            });
        }

        if self.all_pieces() & TOP_ROW_MASK == TOP_ROW_MASK {
            return Some(Value::DRAW);
        }

        None
    }

    pub fn number_of_actions(&self) -> usize {
        self.all_pieces().count_ones() as usize
    }

    fn all_pieces(&self) -> u64 {
        self.p1_piece_board | self.p2_piece_board
    }

    fn has_connected_4(&self) -> bool {
        let board = if self.p1_turn_to_move {
            self.p2_piece_board
        } else {
            self.p1_piece_board
        };

        has_four_in_line(board)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+")?;

        for row in (0..NUM_ROWS).rev() {
            write!(f, "   |")?;
            for column_idx in 0..NUM_COLUMNS {
                let cell = cell_bit(column_idx, row);
                let p = if self.p1_piece_board & cell != 0 {
                    "X"
                } else if self.p2_piece_board & cell != 0 {
                    "O"
                } else {
                    " "
                };
                write!(f, " {} |", p)?;
            }
            writeln!(f)?;
            if row != 0 {
                writeln!(f, "   |---+---+---+---+---+---+---|")?;
            }
        }

        writeln!(f, "   +---+---+---+---+---+---+---+")?;
        writeln!(f, "     1   2   3   4   5   6   7  ")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;

    fn play(columns: &[usize]) -> GameState {
        columns
            .iter()
            .fold(GameState::initial(), |state, column| state.drop_piece(*column))
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::initial();
        assert!(state.p1_turn_to_move);
        assert_eq!(state.p1_piece_board, 0);
        assert_eq!(state.p2_piece_board, 0);
        assert_eq!(state.is_terminal(), None);
    }

    #[test]
    fn test_drop_piece_stacks_on_other_pieces() {
        let state = play(&[1, 1, 4, 4, 4]);

        assert_eq!(
            state.p1_piece_board,
            cell_bit(0, 0) | cell_bit(3, 0) | cell_bit(3, 2)
        );
        assert_eq!(state.p2_piece_board, cell_bit(0, 1) | cell_bit(3, 1));
        assert!(!state.p1_turn_to_move);
    }

    #[test]
    fn test_drop_piece_last_column() {
        let state = play(&[7]);
        assert_eq!(state.p1_piece_board, 1 << (7 * 6));
    }

    #[test]
    fn test_full_column_is_not_valid() {
        let state = play(&[3, 3, 3, 3, 3, 3]);
        let columns: Vec<usize> = state.valid_actions().iter().map(Action::column).collect();

        assert_eq!(columns, vec![1, 2, 4, 5, 6, 7]);
        assert!(!state.is_valid_action(&Action::DropPiece(3)));
        assert!(state.is_valid_action(&Action::DropPiece(4)));
        assert!(!state.is_valid_action(&Action::DropPiece(8)));
    }

    #[test]
    fn test_vertical_win_for_p1() {
        let state = play(&[1, 2, 1, 2, 1, 2, 1]);
        assert_eq!(state.is_terminal(), Some(Value::P1_WIN));
    }

    #[test]
    fn test_horizontal_win_for_p2() {
        let state = play(&[1, 2, 1, 3, 1, 4, 7, 5]);
        assert_eq!(state.is_terminal(), Some(Value::P2_WIN));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // Columns are filled in pairs so every column alternates by row and rows alternate by
        // column pair, which never lines up four.
        let order = [1, 2, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, 3, 4, 3, 4, 3, 4, 4, 3, 4, 3, 4, 3, 5, 6, 5, 6, 5, 6, 6, 5, 6, 5, 6, 5, 7, 7, 7, 7, 7, 7];
        let state = play(&order);

        assert_eq!(state.number_of_actions(), 42);
        assert!(state.valid_actions().is_empty());
        assert_eq!(state.is_terminal(), Some(Value::DRAW));
    }

    #[test]
    fn test_number_of_actions() {
        assert_eq!(play(&[]).number_of_actions(), 0);
        assert_eq!(play(&[3, 3, 4]).number_of_actions(), 3);
    }

    #[test]
    fn test_display_shows_pieces_on_bottom_row() {
        let rendered = play(&[1, 7]).to_string();
        let bottom_row = rendered
            .lines()
            .find(|line| line.starts_with("   | X"))
            .unwrap();

        assert_eq!(bottom_row, "   | X |   |   |   |   |   | O |");
    }
}
