//! Game state and rules: side to move, move validation, make/undo.
//!
//! Moves are checked for *pseudo-legality* only: piece geometry, path
//! clearance and the no-self-capture rule. There is no check detection,
//! castling, en passant or promotion.

use crate::board::{on_board, Board, Color, Piece, PieceKind, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_PAWN_ROW};
use crate::notation::move_notation;

/// Snapshot of one applied move, enough to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
    pub moved_piece: Piece,
    /// `Piece::Empty` when the target cell was empty
    pub captured_piece: Piece,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        !self.captured_piece.is_empty()
    }

    /// "e2-e4" style notation
    pub fn notation(&self) -> String {
        move_notation(self.from_row, self.from_col, self.to_row, self.to_col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.notation())
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white_to_move: bool,
    // Most recent move last
    history: Vec<Move>,
    last_move_notation: String,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game from the standard starting position, white to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup();
        Self {
            board,
            white_to_move: true,
            history: Vec::new(),
            last_move_notation: String::new(),
        }
    }

    /// Build a game from a FEN string. Only the piece placement and the side to move
    /// are used; castling, en-passant and clock fields are accepted and ignored.
    /// A bare placement field means white to move.
    pub fn from_fen(fen: &str) -> Result<Self, &'static str> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or("missing pieces")?;
        let board = Board::from_placement(placement)?;

        let white_to_move = match parts.next() {
            None | Some("w") => true,
            Some("b") => false,
            Some(_) => return Err("invalid side char"),
        };

        Ok(Self {
            board,
            white_to_move,
            history: Vec::new(),
            last_move_notation: String::new(),
        })
    }

    pub fn to_fen(&self) -> String {
        let side = if self.white_to_move { "w" } else { "b" };
        format!("{} {} - - 0 1", self.board.placement(), side)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Piece {
        self.board.get(row, col)
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Notation of the most recently applied move, "" before the first move.
    /// Undo leaves it as it was.
    pub fn last_move_notation(&self) -> &str {
        &self.last_move_notation
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Notations of the applied moves, oldest first.
    pub fn move_list(&self) -> Vec<String> {
        self.history.iter().map(Move::notation).collect()
    }

    /// Whether the cell holds a piece the side to move may pick up.
    pub fn can_select(&self, row: usize, col: usize) -> bool {
        if !on_board(row, col) {
            return false;
        }
        let piece = self.board.get(row, col);
        !piece.is_empty() && piece.is_white() == self.white_to_move
    }

    /// Runs every check `try_make_move` runs, without touching the board.
    pub fn is_move_allowed(&self, sr: usize, sc: usize, tr: usize, tc: usize) -> bool {
        if !on_board(sr, sc) || !on_board(tr, tc) {
            return false;
        }

        let piece = self.board.get(sr, sc);
        if piece.is_empty() {
            return false;
        }
        if piece.is_white() != self.white_to_move {
            return false;
        }
        if !self.is_pseudo_legal(piece, sr, sc, tr, tc) {
            return false;
        }

        // no capturing own pieces
        let target = self.board.get(tr, tc);
        target.is_empty() || target.is_white() != piece.is_white()
    }

    /// Validate and apply a move. Returns false, with the game unchanged, when the
    /// source is empty, the piece belongs to the other side, the geometry or path is
    /// wrong, or the target holds a piece of the mover's color.
    pub fn try_make_move(&mut self, sr: usize, sc: usize, tr: usize, tc: usize) -> bool {
        if !self.is_move_allowed(sr, sc, tr, tc) {
            return false;
        }

        let piece = self.board.get(sr, sc);
        let captured = self.board.get(tr, tc);

        self.board.set(sr, sc, Piece::Empty);
        self.board.set(tr, tc, piece);

        let mv = Move {
            from_row: sr,
            from_col: sc,
            to_row: tr,
            to_col: tc,
            moved_piece: piece,
            captured_piece: captured,
        };
        self.last_move_notation = mv.notation();
        self.history.push(mv);
        self.white_to_move = !self.white_to_move;
        true
    }

    /// Take back the most recent move. Does nothing when there is no history.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        self.board.set(mv.from_row, mv.from_col, mv.moved_piece);
        self.board.set(mv.to_row, mv.to_col, mv.captured_piece);
        self.white_to_move = !self.white_to_move;
    }

    /// Movement geometry and path clearance for `piece` going from (sr, sc) to (tr, tc).
    ///
    /// Pawn captures look at the target occupant; for every other piece the
    /// target occupant is ignored here and self-capture is rejected by the caller.
    pub fn is_pseudo_legal(&self, piece: Piece, sr: usize, sc: usize, tr: usize, tc: usize) -> bool {
        if !on_board(sr, sc) || !on_board(tr, tc) {
            return false;
        }
        if sr == tr && sc == tc {
            return false;
        }

        let dr = tr as i32 - sr as i32;
        let dc = tc as i32 - sc as i32;

        let Some(kind) = piece.kind() else {
            return false;
        };

        match kind {
            PieceKind::Pawn => self.pawn_move_ok(piece, sr, sc, tr, tc, dr, dc),
            PieceKind::Knight => matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2)),
            PieceKind::Bishop => dr.abs() == dc.abs() && self.clear_path(sr, sc, tr, tc),
            PieceKind::Rook => (dr == 0 || dc == 0) && self.clear_path(sr, sc, tr, tc),
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && self.clear_path(sr, sc, tr, tc)
            }
            PieceKind::King => dr.abs().max(dc.abs()) == 1,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn pawn_move_ok(
        &self,
        piece: Piece,
        sr: usize,
        sc: usize,
        tr: usize,
        tc: usize,
        dr: i32,
        dc: i32,
    ) -> bool {
        // white goes up the board (decreasing row), black goes down
        let (dir, home_row) = if piece.is_white() {
            (-1, WHITE_PAWN_ROW)
        } else {
            (1, BLACK_PAWN_ROW)
        };
        let target = self.board.get(tr, tc);

        if dc == 0 && dr == dir && target.is_empty() {
            return true;
        }
        if dc == 0 && sr == home_row && dr == 2 * dir {
            let mid_row = (sr as i32 + dir) as usize;
            return self.board.get(mid_row, sc).is_empty() && target.is_empty();
        }
        dc.abs() == 1 && dr == dir && !target.is_empty() && target.is_white() != piece.is_white()
    }

    // Walks from source toward target one unit step at a time; endpoints are not inspected.
    // Only called on straight or diagonal lines.
    fn clear_path(&self, sr: usize, sc: usize, tr: usize, tc: usize) -> bool {
        let dr = (tr as i32 - sr as i32).signum();
        let dc = (tc as i32 - sc as i32).signum();
        let (tr, tc) = (tr as i32, tc as i32);

        let mut r = sr as i32 + dr;
        let mut c = sc as i32 + dc;
        while r != tr || c != tc {
            if self.board.is_occupied(r as usize, c as usize) {
                return false;
            }
            r += dr;
            c += dc;
        }
        true
    }

    /// Every move the side to move may play, sources and targets in row-major order.
    pub fn generate_moves(&self) -> Vec<Move> {
        let side = self.side_to_move();
        let mut out = Vec::with_capacity(64);
        for (sr, sc, piece) in self.board.pieces() {
            if piece.color() != Some(side) {
                continue;
            }
            for tr in 0..BOARD_SIZE {
                for tc in 0..BOARD_SIZE {
                    if self.is_move_allowed(sr, sc, tr, tc) {
                        out.push(Move {
                            from_row: sr,
                            from_col: sc,
                            to_row: tr,
                            to_col: tc,
                            moved_piece: piece,
                            captured_piece: self.board.get(tr, tc),
                        });
                    }
                }
            }
        }
        out
    }

    /// Count leaf nodes of the move tree `depth` plies deep. The game is left as it was.
    pub fn perft(&mut self, depth: u32) -> u64 {
        let saved_notation = self.last_move_notation.clone();
        let nodes = self.perft_inner(depth);
        self.last_move_notation = saved_notation;
        nodes
    }

    /// Per-move node counts at the root, in `generate_moves` order.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let saved_notation = self.last_move_notation.clone();
        let mut out = Vec::new();
        if depth > 0 {
            for mv in self.generate_moves() {
                if self.try_make_move(mv.from_row, mv.from_col, mv.to_row, mv.to_col) {
                    out.push((mv, self.perft_inner(depth - 1)));
                    self.undo();
                }
            }
        }
        self.last_move_notation = saved_notation;
        out
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0u64;
        for mv in self.generate_moves() {
            if self.try_make_move(mv.from_row, mv.from_col, mv.to_row, mv.to_col) {
                nodes += self.perft_inner(depth - 1);
                self.undo();
            }
        }
        nodes
    }
}
