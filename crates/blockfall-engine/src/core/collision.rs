use super::{
    board::{Board, HEIGHT, WIDTH},
    piece::{Piece, Position},
};

/// Returns `true` if `piece` placed at `position` is not a legal placement.
///
/// A placement is illegal when any occupied cell of the piece
///
/// - lies left of column `0` or right of the last column,
/// - lies at or below row [`HEIGHT`], or
/// - lands on a settled board cell.
///
/// Rows above the board (`y < 0`) are exempt from the settled-cell check, so
/// a piece may hang partly above the board, but never from the horizontal
/// bounds.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Piece, PieceKind, Position, collides};
///
/// let piece = Piece::new(PieceKind::I);
/// assert!(!collides(&piece, Position::new(6, 0), &Board::EMPTY));
/// assert!(collides(&piece, Position::new(7, 0), &Board::EMPTY));
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn collides(piece: &Piece, position: Position, board: &Board) -> bool {
    piece.cells_at(position).into_iter().any(|cell| {
        cell.x < 0 || cell.x >= WIDTH as i32 || cell.y >= HEIGHT as i32 || board.is_occupied(cell)
    })
}

#[cfg(test)]
mod tests {
    use crate::{Cell, PieceColor, PieceKind};

    use super::*;

    #[test]
    fn test_free_placement() {
        let piece = Piece::new(PieceKind::T);
        assert!(!collides(&piece, Position::new(0, 0), &Board::EMPTY));
        assert!(!collides(&piece, Position::new(7, 18), &Board::EMPTY));
    }

    #[test]
    fn test_horizontal_bounds() {
        let piece = Piece::new(PieceKind::O);
        assert!(collides(&piece, Position::new(-1, 5), &Board::EMPTY));
        assert!(!collides(&piece, Position::new(8, 5), &Board::EMPTY));
        assert!(collides(&piece, Position::new(9, 5), &Board::EMPTY));
    }

    #[test]
    fn test_horizontal_bounds_apply_above_board() {
        let piece = Piece::new(PieceKind::I);
        assert!(collides(&piece, Position::new(-1, -2), &Board::EMPTY));
        assert!(collides(&piece, Position::new(7, -2), &Board::EMPTY));
    }

    #[test]
    fn test_bottom_bound() {
        let piece = Piece::new(PieceKind::O);
        assert!(!collides(&piece, Position::new(0, 18), &Board::EMPTY));
        assert!(collides(&piece, Position::new(0, 19), &Board::EMPTY));
    }

    #[test]
    fn test_settled_cells() {
        let board = Board::EMPTY.with_cell(5, 10, Cell::Filled(PieceColor::Red));
        let piece = Piece::new(PieceKind::O);
        assert!(collides(&piece, Position::new(4, 9), &board));
        assert!(collides(&piece, Position::new(5, 10), &board));
        assert!(!collides(&piece, Position::new(6, 10), &board));
        assert!(!collides(&piece, Position::new(4, 11), &board));
    }

    #[test]
    fn test_rows_above_board_ignore_settled_cells() {
        // Fill the whole top row; a piece entirely above it is still legal.
        let board = (0..WIDTH).fold(Board::EMPTY, |board, x| {
            board.with_cell(x, 0, Cell::Filled(PieceColor::Green))
        });
        let piece = Piece::new(PieceKind::T);
        assert!(!collides(&piece, Position::SPAWN, &board));
        assert!(collides(&piece, Position::SPAWN.lowered(), &board));
    }

    #[test]
    fn test_only_occupied_mask_cells_count() {
        // The empty top-left corner of the S mask may overlap a settled cell.
        let board = Board::EMPTY.with_cell(0, 10, Cell::Filled(PieceColor::Red));
        let piece = Piece::new(PieceKind::S);
        assert!(!collides(&piece, Position::new(0, 10), &board));
    }
}
