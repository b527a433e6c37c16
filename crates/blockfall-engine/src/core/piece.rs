use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::board::{HEIGHT, WIDTH};

/// Maximum width of a shape's bounding box.
pub const MAX_SHAPE_WIDTH: usize = 4;
/// Maximum height of a shape's bounding box.
pub const MAX_SHAPE_HEIGHT: usize = 2;
/// Capacity of a shape's occupied-cell list.
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_WIDTH * MAX_SHAPE_HEIGHT;

/// A falling piece: one catalog shape plus the color its cells take when locked.
///
/// The color is carried alongside the kind because locked board cells only
/// remember the color, never the shape they came from.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PieceColor, PieceKind};
///
/// let piece = Piece::new(PieceKind::T);
/// assert_eq!(piece.color(), PieceColor::Purple);
/// assert_eq!(piece.shape().width(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
}

impl Piece {
    /// Creates a piece of the given kind with its catalog color.
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            color: kind.color(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn color(&self) -> PieceColor {
        self.color
    }

    #[must_use]
    pub const fn shape(&self) -> &'static Shape {
        self.kind.shape()
    }

    /// Returns the absolute board coordinates covered by this piece when its
    /// bounding box's top-left corner sits at `position`.
    #[must_use]
    pub fn cells_at(&self, position: Position) -> ArrayVec<Position, MAX_SHAPE_CELLS> {
        self.shape()
            .offsets()
            .into_iter()
            .map(|(dx, dy)| Position::new(position.x + dx, position.y + dy))
            .collect()
    }
}

/// Board coordinate of a piece's bounding-box origin (its top-left corner).
///
/// `x` grows rightward and `y` grows downward. `y` may be negative while a
/// piece is still entering the board from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Where every new piece begins: two rows above the visible board,
    /// horizontally centered-left.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const SPAWN: Self = Self::new((WIDTH / 2) as i32 - 1, -2);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn shifted(self, dx: i32) -> Self {
        Self::new(self.x + dx, self.y)
    }

    #[must_use]
    pub const fn lowered(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// Returns `true` if this coordinate lies inside the visible board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn is_visible(self) -> bool {
        self.x >= 0 && self.x < WIDTH as i32 && self.y >= 0 && self.y < HEIGHT as i32
    }
}

/// Display color of a piece, and of the board cells it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// The seven tetromino identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// Every piece kind, in catalog order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Returns the canonical shape of this piece kind.
    #[must_use]
    pub const fn shape(self) -> &'static Shape {
        &SHAPES[self as usize]
    }

    /// Returns the catalog color of this piece kind.
    #[must_use]
    pub const fn color(self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::Z => PieceColor::Red,
        }
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('S'), Some(PieceKind::S));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Immutable occupancy mask of a tetromino in its canonical orientation.
///
/// The mask is stored in a fixed `MAX_SHAPE_HEIGHT × MAX_SHAPE_WIDTH` array;
/// only the top-left `height × width` region is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: u8,
    height: u8,
    mask: [[bool; MAX_SHAPE_WIDTH]; MAX_SHAPE_HEIGHT],
}

impl Shape {
    const fn new(width: u8, height: u8, mask: [[bool; MAX_SHAPE_WIDTH]; MAX_SHAPE_HEIGHT]) -> Self {
        assert!(width as usize <= MAX_SHAPE_WIDTH);
        assert!(height as usize <= MAX_SHAPE_HEIGHT);
        let mut y = 0;
        while y < MAX_SHAPE_HEIGHT {
            let mut x = 0;
            while x < MAX_SHAPE_WIDTH {
                assert!(!mask[y][x] || (x < width as usize && y < height as usize));
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height,
            mask,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Returns whether the local cell `(x, y)` is part of the shape.
    ///
    /// Coordinates outside the bounding box are reported as unoccupied.
    #[must_use]
    pub const fn is_occupied(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.mask[y][x]
    }

    /// Returns the local `(dx, dy)` offsets of every occupied cell,
    /// row by row from the top-left.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn offsets(&self) -> ArrayVec<(i32, i32), MAX_SHAPE_CELLS> {
        let mut offsets = ArrayVec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.mask[y][x] {
                    offsets.push((x as i32, y as i32));
                }
            }
        }
        offsets
    }
}

const SHAPES: [Shape; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; MAX_SHAPE_WIDTH] = [E; MAX_SHAPE_WIDTH];
    [
        // I-piece
        Shape::new(4, 1, [[C, C, C, C], EEEE]),
        // J-piece
        Shape::new(3, 2, [[C, E, E, E], [C, C, C, E]]),
        // L-piece
        Shape::new(3, 2, [[E, E, C, E], [C, C, C, E]]),
        // O-piece
        Shape::new(2, 2, [[C, C, E, E], [C, C, E, E]]),
        // S-piece
        Shape::new(3, 2, [[E, C, C, E], [C, C, E, E]]),
        // T-piece
        Shape::new(3, 2, [[E, C, E, E], [C, C, C, E]]),
        // Z-piece
        Shape::new(3, 2, [[C, C, E, E], [E, C, C, E]]),
    ]
};

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn render_shape(shape: &Shape) -> Vec<String> {
        (0..shape.height())
            .map(|y| {
                (0..shape.width())
                    .map(|x| if shape.is_occupied(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_catalog_shapes() {
        let expected: [(PieceKind, &[&str]); PieceKind::LEN] = [
            (PieceKind::I, &["####"]),
            (PieceKind::J, &["#..", "###"]),
            (PieceKind::L, &["..#", "###"]),
            (PieceKind::O, &["##", "##"]),
            (PieceKind::S, &[".##", "##."]),
            (PieceKind::T, &[".#.", "###"]),
            (PieceKind::Z, &["##.", ".##"]),
        ];
        for (kind, rows) in expected {
            assert_eq!(render_shape(kind.shape()), rows, "shape of {kind:?}");
        }
    }

    #[test]
    fn test_every_shape_is_a_tetromino() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.shape().offsets().len(), 4, "{kind:?} should have 4 cells");
        }
    }

    #[test]
    fn test_catalog_colors() {
        assert_eq!(PieceKind::I.color(), PieceColor::Cyan);
        assert_eq!(PieceKind::J.color(), PieceColor::Blue);
        assert_eq!(PieceKind::L.color(), PieceColor::Orange);
        assert_eq!(PieceKind::O.color(), PieceColor::Yellow);
        assert_eq!(PieceKind::S.color(), PieceColor::Green);
        assert_eq!(PieceKind::T.color(), PieceColor::Purple);
        assert_eq!(PieceKind::Z.color(), PieceColor::Red);
    }

    #[test]
    fn test_spawn_position() {
        assert_eq!(Position::SPAWN, Position::new(4, -2));
    }

    #[test]
    fn test_cells_at_translates_offsets() {
        let piece = Piece::new(PieceKind::S);
        let cells = piece.cells_at(Position::new(3, 5));
        assert_eq!(
            cells.as_slice(),
            &[
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(3, 6),
                Position::new(4, 6),
            ]
        );
    }

    #[test]
    fn test_is_visible() {
        assert!(Position::new(0, 0).is_visible());
        assert!(Position::new(9, 19).is_visible());
        assert!(!Position::new(-1, 0).is_visible());
        assert!(!Position::new(10, 0).is_visible());
        assert!(!Position::new(0, -1).is_visible());
        assert!(!Position::new(0, 20).is_visible());
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn test_uniform_distribution_covers_all_kinds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts = [0_usize; PieceKind::LEN];
        for _ in 0..7000 {
            let kind: PieceKind = rng.random();
            counts[kind as usize] += 1;
        }
        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!(
                (700..1300).contains(&count),
                "{kind:?} drawn {count} times out of 7000"
            );
        }
    }

    #[test]
    fn test_piece_color_serialization() {
        let json = serde_json::to_string(&PieceColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
    }
}
