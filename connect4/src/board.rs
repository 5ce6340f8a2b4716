pub const NUM_COLUMNS: usize = 7;
pub const NUM_ROWS: usize = 6;

/// Each column takes 7 bits: 6 rows from the bottom up plus an empty sentinel bit which keeps
/// the shifted line checks from wrapping into the next column.
const BITS_PER_COLUMN: usize = NUM_ROWS + 1;

pub const TOP_ROW_MASK: u64 = 0b0100000_0100000_0100000_0100000_0100000_0100000_0100000;

/// The lowest bit of the 1 based column.
pub fn column_base(column: usize) -> u64 {
    1 << (BITS_PER_COLUMN * (column - 1))
}

/// Bit of the cell at a 0 based column and a 0 based row counted from the bottom.
pub fn cell_bit(column_idx: usize, row_from_bottom: usize) -> u64 {
    1 << (BITS_PER_COLUMN * column_idx + row_from_bottom)
}

pub fn is_column_full(all_pieces: u64, column: usize) -> bool {
    let top_cell = column_base(column) << (NUM_ROWS - 1);
    top_cell & all_pieces != 0
}

/// True if the board holds four pieces in a row, column or diagonal.
pub fn has_four_in_line(board: u64) -> bool {
    // Vertical, diagonal down, horizontal, diagonal up.
    [1, BITS_PER_COLUMN - 1, BITS_PER_COLUMN, BITS_PER_COLUMN + 1]
        .iter()
        .any(|shift| {
            let pairs = board & (board << shift);
            pairs & (pairs << (2 * shift)) != 0
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_bit_corners() {
        assert_eq!(cell_bit(0, 0), 1);
        assert_eq!(cell_bit(0, 5), 1 << 5);
        assert_eq!(cell_bit(6, 0), 1 << 42);
        assert_eq!(cell_bit(6, 5), 1 << 47);
    }

    #[test]
    fn test_top_row_mask_matches_cells() {
        let mask = (0..NUM_COLUMNS).fold(0, |mask, column_idx| mask | cell_bit(column_idx, 5));
        assert_eq!(mask, TOP_ROW_MASK);
    }

    #[test]
    fn test_four_in_line_horizontal() {
        let board = (1..5).fold(0, |b, c| b | cell_bit(c, 0));
        assert!(has_four_in_line(board));
    }

    #[test]
    fn test_four_in_line_diagonal() {
        let up = (0..4).fold(0, |b, i| b | cell_bit(i, i));
        let down = (0..4).fold(0, |b, i| b | cell_bit(i + 3, 5 - i));
        assert!(has_four_in_line(up));
        assert!(has_four_in_line(down));
    }

    #[test]
    fn test_three_in_line_is_not_four() {
        let board = cell_bit(0, 0) | cell_bit(0, 1) | cell_bit(0, 2);
        assert!(!has_four_in_line(board));
    }

    #[test]
    fn test_vertical_line_does_not_wrap_columns() {
        // Top two cells of column 1 and bottom two of column 2 are adjacent bits only through the sentinel.
        let board = cell_bit(0, 4) | cell_bit(0, 5) | cell_bit(1, 0) | cell_bit(1, 1);
        assert!(!has_four_in_line(board));
    }
}
