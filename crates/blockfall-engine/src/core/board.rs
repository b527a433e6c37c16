use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceColor, Position};

/// Number of columns on the board.
pub const WIDTH: usize = 10;
/// Number of rows on the board.
pub const HEIGHT: usize = 20;

/// A single board cell: empty, or holding the color of a locked piece.
///
/// Serializes as `null` or the lowercase color name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<PieceColor>", into = "Option<PieceColor>")]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceColor),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn color(self) -> Option<PieceColor> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(color),
        }
    }
}

impl From<Option<PieceColor>> for Cell {
    fn from(color: Option<PieceColor>) -> Self {
        color.map_or(Cell::Empty, Cell::Filled)
    }
}

impl From<Cell> for Option<PieceColor> {
    fn from(cell: Cell) -> Self {
        cell.color()
    }
}

/// One board row of exactly [`WIDTH`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: [Cell; WIDTH],
}

impl Row {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; WIDTH],
    };

    #[must_use]
    pub fn cells(&self) -> &[Cell; WIDTH] {
        &self.cells
    }

    /// A row is full when none of its cells is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

/// The fixed `WIDTH × HEIGHT` grid of settled cells.
///
/// Boards are plain values. Every mutating operation ([`merge`], [`clear_full_rows`],
/// [`with_cell`]) returns a new board and leaves the receiver untouched, so a
/// game state can be snapshotted simply by copying it.
///
/// Row `0` is the top of the visible board.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Piece, PieceKind, Position};
///
/// let board = Board::EMPTY;
/// let merged = board.merge(&Piece::new(PieceKind::O), Position::new(0, 18));
///
/// assert!(board.cell(0, 19).unwrap().is_empty());
/// assert!(!merged.cell(0, 19).unwrap().is_empty());
/// ```
///
/// [`merge`]: Self::merge
/// [`clear_full_rows`]: Self::clear_full_rows
/// [`with_cell`]: Self::with_cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = WIDTH;
    pub const HEIGHT: usize = HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [Row::EMPTY; HEIGHT],
    };

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.rows.iter().map(Row::cells)
    }

    /// Returns the cell at `(x, y)`, or `None` if the coordinate is off the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y)?.cells.get(x).copied()
    }

    /// Returns whether the visible cell at `position` is settled.
    ///
    /// Coordinates outside the visible board are never occupied.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        visible_index(position).is_some_and(|(x, y)| !self.rows[y].cells[x].is_empty())
    }

    /// Returns a copy of this board with a single cell replaced.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    #[must_use]
    pub fn with_cell(&self, x: usize, y: usize, cell: Cell) -> Self {
        let mut board = *self;
        board.rows[y].cells[x] = cell;
        board
    }

    /// Returns a copy of this board with the piece's cells written in its color.
    ///
    /// Cells that fall above the visible board (`y < 0`) are discarded.
    #[must_use]
    pub fn merge(&self, piece: &Piece, position: Position) -> Self {
        let mut board = *self;
        for cell in piece.cells_at(position) {
            if let Some((x, y)) = visible_index(cell) {
                board.rows[y].cells[x] = Cell::Filled(piece.color());
            }
        }
        board
    }

    /// Removes every full row at once and returns the compacted board together
    /// with the number of rows removed.
    ///
    /// Removed rows are replaced by empty rows at the top; the remaining rows
    /// keep their relative order.
    #[must_use]
    pub fn clear_full_rows(&self) -> (Self, usize) {
        let mut board = Self::EMPTY;
        let mut dest = HEIGHT;
        for row in self.rows.iter().rev().filter(|row| !row.is_full()) {
            dest -= 1;
            board.rows[dest] = *row;
        }
        (board, dest)
    }
}

fn visible_index(position: Position) -> Option<(usize, usize)> {
    if !position.is_visible() {
        return None;
    }
    Some((
        usize::try_from(position.x).ok()?,
        usize::try_from(position.y).ok()?,
    ))
}
