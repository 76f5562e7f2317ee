// Board layout: row 0 = rank 8 (black back rank), row 7 = rank 1 (white back rank),
// column 0 = file a. Every cell always holds a Piece, Empty included.

pub const BOARD_SIZE: usize = 8;

// Pawn home rows (two-step advance allowed from here)
pub const WHITE_PAWN_ROW: usize = 6;
pub const BLACK_PAWN_ROW: usize = 1;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Occupant of a board cell.
///
/// Color and kind are not stored separately: both are derived from the
/// variant, see [`Piece::color`] and [`Piece::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    pub const ALL: [Piece; 12] = [
        Piece::WhitePawn,
        Piece::WhiteKnight,
        Piece::WhiteBishop,
        Piece::WhiteRook,
        Piece::WhiteQueen,
        Piece::WhiteKing,
        Piece::BlackPawn,
        Piece::BlackKnight,
        Piece::BlackBishop,
        Piece::BlackRook,
        Piece::BlackQueen,
        Piece::BlackKing,
    ];

    pub fn new(kind: PieceKind, color: Color) -> Piece {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// True for the six white variants; false for black pieces and `Empty`.
    pub fn is_white(self) -> bool {
        matches!(
            self,
            Piece::WhitePawn
                | Piece::WhiteKnight
                | Piece::WhiteBishop
                | Piece::WhiteRook
                | Piece::WhiteQueen
                | Piece::WhiteKing
        )
    }

    pub fn is_black(self) -> bool {
        !self.is_empty() && !self.is_white()
    }

    pub fn color(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else if self.is_white() {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn | Piece::BlackPawn => Some(PieceKind::Pawn),
            Piece::WhiteKnight | Piece::BlackKnight => Some(PieceKind::Knight),
            Piece::WhiteBishop | Piece::BlackBishop => Some(PieceKind::Bishop),
            Piece::WhiteRook | Piece::BlackRook => Some(PieceKind::Rook),
            Piece::WhiteQueen | Piece::BlackQueen => Some(PieceKind::Queen),
            Piece::WhiteKing | Piece::BlackKing => Some(PieceKind::King),
        }
    }

    /// Display symbol used by the front end. `Empty` renders as "".
    pub fn glyph(self) -> &'static str {
        match self {
            Piece::WhiteKing => "♔",
            Piece::WhiteQueen => "♕",
            Piece::WhiteRook => "♖",
            Piece::WhiteBishop => "♗",
            Piece::WhiteKnight => "♘",
            Piece::WhitePawn => "♙",
            Piece::BlackKing => "♚",
            Piece::BlackQueen => "♛",
            Piece::BlackRook => "♜",
            Piece::BlackBishop => "♝",
            Piece::BlackKnight => "♞",
            Piece::BlackPawn => "♟",
            Piece::Empty => "",
        }
    }

    // FEN letter, uppercase for white; '.' for Empty (diagram only, never written to FEN)
    pub fn to_char(self) -> char {
        match self {
            Piece::WhitePawn => 'P',
            Piece::WhiteKnight => 'N',
            Piece::WhiteBishop => 'B',
            Piece::WhiteRook => 'R',
            Piece::WhiteQueen => 'Q',
            Piece::WhiteKing => 'K',
            Piece::BlackPawn => 'p',
            Piece::BlackKnight => 'n',
            Piece::BlackBishop => 'b',
            Piece::BlackRook => 'r',
            Piece::BlackQueen => 'q',
            Piece::BlackKing => 'k',
            Piece::Empty => '.',
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let piece = match ch {
            'P' => Piece::WhitePawn,
            'N' => Piece::WhiteKnight,
            'B' => Piece::WhiteBishop,
            'R' => Piece::WhiteRook,
            'Q' => Piece::WhiteQueen,
            'K' => Piece::WhiteKing,
            'p' => Piece::BlackPawn,
            'n' => Piece::BlackKnight,
            'b' => Piece::BlackBishop,
            'r' => Piece::BlackRook,
            'q' => Piece::BlackQueen,
            'k' => Piece::BlackKing,
            _ => return None,
        };
        Some(piece)
    }
}

/// Free-function form of [`Piece::is_white`].
pub fn is_white(piece: Piece) -> bool {
    piece.is_white()
}

/// Free-function form of [`Piece::glyph`].
pub fn glyph(piece: Piece) -> &'static str {
    piece.glyph()
}

pub fn on_board(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn start_position() -> Self {
        let mut board = Self::empty();
        board.setup();
        board
    }

    /// Places the standard starting position. Cells not part of it are left as they are,
    /// so call it on an empty board.
    pub fn setup(&mut self) {
        for c in 0..BOARD_SIZE {
            self.cells[WHITE_PAWN_ROW][c] = Piece::WhitePawn;
            self.cells[BLACK_PAWN_ROW][c] = Piece::BlackPawn;
        }

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back_rank.iter().enumerate() {
            self.cells[7][c] = Piece::new(kind, Color::White);
            self.cells[0][c] = Piece::new(kind, Color::Black);
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Piece {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece;
    }

    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.cells[row][col].is_empty()
    }

    pub fn rows(&self) -> &[[Piece; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Occupied cells in row-major order as `(row, col, piece)`.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, p)| !p.is_empty())
                .map(move |(c, &p)| (r, c, p))
        })
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&p| p == piece)
            .count()
    }

    // FEN piece-placement field: rank 8 first, which is exactly row 0 first
    pub fn from_placement(placement: &str) -> Result<Board, &'static str> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err("placement must have 8 ranks");
        }

        for (row, rank_part) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_part.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if skip == 0 || skip as usize > BOARD_SIZE {
                        return Err("invalid empty-square count");
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_char(ch).ok_or("invalid piece char")?;
                    if col >= BOARD_SIZE {
                        return Err("rank too long");
                    }
                    board.cells[row][col] = piece;
                    col += 1;
                }
                if col > BOARD_SIZE {
                    return Err("rank too long");
                }
            }
            if col != BOARD_SIZE {
                return Err("rank too short");
            }
        }

        Ok(board)
    }

    pub fn placement(&self) -> String {
        let mut out = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            let mut empty = 0;
            for &p in row {
                if p.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(p.to_char());
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if r + 1 < BOARD_SIZE {
                out.push('/');
            }
        }
        out
    }
}

// Simple diagram, rank 8 on top
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &p in row {
                write!(f, "{} ", p.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
