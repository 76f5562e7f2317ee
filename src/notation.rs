//! Algebraic square names for the row/column grid.
//!
//! Column 0..7 maps to files `a`..`h`, row `r` maps to rank `8 - r`.

use crate::board::BOARD_SIZE;

/// Convert a (row, col) cell to its algebraic name (e.g. (6, 4) -> "e2", (0, 0) -> "a8")
pub fn square_name(row: usize, col: usize) -> String {
    let file = (b'a' + col as u8) as char;
    let rank = BOARD_SIZE - row;
    format!("{}{}", file, rank)
}

/// Notation of a move as shown in the move list: "<from>-<to>"
pub fn move_notation(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> String {
    format!(
        "{}-{}",
        square_name(from_row, from_col),
        square_name(to_row, to_col)
    )
}

/// Parse an algebraic square ("e2") into (row, col)
pub fn parse_square(s: &str) -> Result<(usize, usize), &'static str> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err("Invalid square notation");
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err("Invalid square notation");
    }

    let col = (file - b'a') as usize;
    let row = BOARD_SIZE - (rank - b'0') as usize;
    Ok((row, col))
}

/// Parse a move typed by the user: "e2e4" or "e2-e4".
/// Returns ((from_row, from_col), (to_row, to_col)).
pub fn parse_move(s: &str) -> Result<((usize, usize), (usize, usize)), &'static str> {
    let s = s.trim();
    let (from, to) = match s.len() {
        4 if s.is_ascii() => (&s[0..2], &s[2..4]),
        5 if s.is_ascii() && s.as_bytes()[2] == b'-' => (&s[0..2], &s[3..5]),
        _ => return Err("Move must look like e2e4 or e2-e4"),
    };
    Ok((parse_square(from)?, parse_square(to)?))
}
