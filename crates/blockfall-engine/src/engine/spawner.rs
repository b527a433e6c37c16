use std::str::FromStr;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::core::piece::{Piece, PieceKind, Position};

/// Supplier of piece identifiers for the spawner.
///
/// The engine draws from this source every time it needs a new piece. Tests
/// and replays plug in [`ScriptedPieceSource`]; normal play uses
/// [`RandomPieceSource`].
pub trait PieceSource {
    /// Returns the identifier of the next piece to spawn.
    fn next_kind(&mut self) -> PieceKind;
}

impl<S> PieceSource for &mut S
where
    S: PieceSource + ?Sized,
{
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S> PieceSource for Box<S>
where
    S: PieceSource + ?Sized,
{
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Draws a fresh piece from `source` and returns it with the spawn position.
pub fn spawn<S>(source: &mut S) -> (Piece, Position)
where
    S: PieceSource + ?Sized,
{
    (Piece::new(source.next_kind()), Position::SPAWN)
}

/// Picks each piece independently and uniformly at random.
///
/// Using the same seed yields the same piece sequence.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceSource, RandomPieceSource};
///
/// let mut a = RandomPieceSource::with_seed(42);
/// let mut b = RandomPieceSource::with_seed(42);
/// for _ in 0..10 {
///     assert_eq!(a.next_kind(), b.next_kind());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomPieceSource {
    rng: Pcg32,
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPieceSource {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl PieceSource for RandomPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        self.rng.random()
    }
}

/// Error returned when a piece sequence is empty or contains an unknown letter.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSequenceError {
    #[display("piece sequence must not be empty")]
    Empty,
    #[display("invalid piece kind: {_0:?}")]
    InvalidKind(#[error(not(source))] char),
}

/// Replays a fixed sequence of pieces, wrapping around at the end.
///
/// # Example
///
/// ```
/// use blockfall_engine::{PieceKind, PieceSource, ScriptedPieceSource};
///
/// let mut source: ScriptedPieceSource = "IO".parse().unwrap();
/// assert_eq!(source.next_kind(), PieceKind::I);
/// assert_eq!(source.next_kind(), PieceKind::O);
/// assert_eq!(source.next_kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedPieceSource {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieceSource {
    pub fn new(
        kinds: impl IntoIterator<Item = PieceKind>,
    ) -> Result<Self, ParsePieceSequenceError> {
        let kinds: Vec<_> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(ParsePieceSequenceError::Empty);
        }
        Ok(Self { kinds, next: 0 })
    }
}

impl FromStr for ScriptedPieceSource {
    type Err = ParsePieceSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kinds = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                PieceKind::from_char(c.to_ascii_uppercase())
                    .ok_or(ParsePieceSequenceError::InvalidKind(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(kinds)
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_uses_canonical_position() {
        let mut source: ScriptedPieceSource = "Z".parse().unwrap();
        let (piece, position) = spawn(&mut source);
        assert_eq!(piece, Piece::new(PieceKind::Z));
        assert_eq!(position, Position::new(4, -2));
    }

    #[test]
    fn test_random_source_is_deterministic_per_seed() {
        let a: Vec<_> = {
            let mut source = RandomPieceSource::with_seed(1);
            (0..50).map(|_| source.next_kind()).collect()
        };
        let b: Vec<_> = {
            let mut source = RandomPieceSource::with_seed(1);
            (0..50).map(|_| source.next_kind()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_source_yields_every_kind() {
        let mut source = RandomPieceSource::with_seed(3);
        let mut seen = [false; PieceKind::LEN];
        for _ in 0..500 {
            seen[source.next_kind() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every kind drawn: {seen:?}");
    }

    #[test]
    fn test_scripted_source_wraps() {
        let mut source = ScriptedPieceSource::new([PieceKind::T, PieceKind::L]).unwrap();
        let drawn: Vec<_> = (0..5).map(|_| source.next_kind()).collect();
        assert_eq!(
            drawn,
            [PieceKind::T, PieceKind::L, PieceKind::T, PieceKind::L, PieceKind::T]
        );
    }

    #[test]
    fn test_scripted_source_parse_errors() {
        assert_eq!(
            "".parse::<ScriptedPieceSource>().unwrap_err(),
            ParsePieceSequenceError::Empty
        );
        assert_eq!(
            "IQ".parse::<ScriptedPieceSource>().unwrap_err(),
            ParsePieceSequenceError::InvalidKind('Q')
        );
    }

    #[test]
    fn test_scripted_source_parse_is_case_insensitive() {
        let mut source: ScriptedPieceSource = "s z".parse().unwrap();
        assert_eq!(source.next_kind(), PieceKind::S);
        assert_eq!(source.next_kind(), PieceKind::Z);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn PieceSource> =
            Box::new(ScriptedPieceSource::new([PieceKind::O]).unwrap());
        assert_eq!(spawn(&mut source).0.kind(), PieceKind::O);
    }
}
