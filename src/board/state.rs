use once_cell::sync::Lazy;

use super::{CastlingRights, Color, Piece, Square, BOARD_SIZE};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Column of both kings in the initial position
pub(crate) const KING_START_COL: usize = 4;

static STARTING_POSITION: Lazy<Position> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, piece) in BACK_RANK.iter().enumerate() {
        board.set_piece(Square(0, col), Color::Black, *piece);
        board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
        board.set_piece(Square(6, col), Color::White, Piece::Pawn);
        board.set_piece(Square(7, col), Color::White, *piece);
    }
    Position {
        board,
        side_to_move: Color::White,
        castling_rights: CastlingRights::all(),
        en_passant_target: None,
        king_squares: [
            Square(Color::White.home_row(), KING_START_COL),
            Square(Color::Black.home_row(), KING_START_COL),
        ],
    }
});

/// Piece placement on the 8x8 grid.
///
/// Nothing else holds piece identity: a captured piece simply disappears
/// from the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board::default()
    }

    /// Piece and color on a square; `None` for empty or off-board squares
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if sq.in_bounds() {
            self.squares[sq.0][sq.1]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    /// Clear a square, returning whatever stood on it
    #[inline]
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, content: Option<(Color, Piece)>) {
        self.squares[sq.0][sq.1] = content;
    }

    /// Every occupied square in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// Squares and piece types of one color in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, c, _)| *c == color)
            .map(|(sq, _, p)| (sq, p))
    }

    /// All squares holding a king of `color`
    pub(crate) fn kings(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces_of(color)
            .filter(|(_, piece)| *piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Raw grid rows, row 0 first
    #[must_use]
    pub fn rows(&self) -> &[[Option<(Color, Piece)>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }
}

/// Everything legality depends on: placement, side to move, castling rights,
/// the en passant target and the cached king squares.
///
/// `Position` is a small `Copy` value. Read-only queries that need to try a
/// move work on a scratch copy with make/unmake, so the caller's position is
/// never touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) king_squares: [Square; 2],
}

impl Position {
    /// The standard initial position, White to move, all rights available.
    #[must_use]
    pub fn new() -> Self {
        *STARTING_POSITION
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square skipped by the previous move's pawn double step, if any
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Cached location of `color`'s king
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub(crate) fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    /// Hand the move to the other side. Only committed moves call this.
    #[inline]
    pub(crate) fn toggle_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let pos = Position::new();
        let board = pos.board();
        assert_eq!(board.piece_at(Square(0, 0)), Some((Color::Black, Piece::Rook)));
        assert_eq!(board.piece_at(Square(0, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::Black, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(6, 2)), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.occupied().count(), 32);
        assert!(Square::all()
            .filter(|sq| (2..6).contains(&sq.row()))
            .all(|sq| board.is_empty(sq)));
    }

    #[test]
    fn test_starting_state() {
        let pos = Position::new();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling_rights(), CastlingRights::all());
        assert_eq!(pos.en_passant_target(), None);
        assert_eq!(pos.king_square(Color::White), Square(7, 4));
        assert_eq!(pos.king_square(Color::Black), Square(0, 4));
    }

    #[test]
    fn test_off_board_reads_as_empty() {
        let board = Position::new().board;
        assert_eq!(board.piece_at(Square(8, 0)), None);
        assert!(board.is_empty(Square(0, 12)));
    }

    #[test]
    fn test_pieces_of_counts() {
        let board = Position::new().board;
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.kings(Color::Black).collect::<Vec<_>>(), vec![Square(0, 4)]);
    }
}
