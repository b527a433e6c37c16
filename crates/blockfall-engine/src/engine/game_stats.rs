/// Points awarded per cleared row. Simultaneous clears are simply summed.
pub const SCORE_PER_ROW: usize = 100;

/// Running totals for the current game.
///
/// - **Score**: [`SCORE_PER_ROW`] points for every cleared row
/// - **Cleared rows**: total rows removed
/// - **Locked pieces**: total pieces merged into the board
///
/// There are no combo, multi-clear or level bonuses.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock(3);
///
/// assert_eq!(stats.score(), 300);
/// assert_eq!(stats.cleared_rows(), 3);
/// assert_eq!(stats.locked_pieces(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    cleared_rows: usize,
    locked_pieces: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            cleared_rows: 0,
            locked_pieces: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    /// Updates the totals after a lock event that removed `cleared_rows` rows.
    pub const fn record_lock(&mut self, cleared_rows: usize) {
        self.locked_pieces += 1;
        self.cleared_rows += cleared_rows;
        self.score += SCORE_PER_ROW * cleared_rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        assert_eq!(GameStats::new(), GameStats::default());
        assert_eq!(GameStats::new().score(), 0);
    }

    #[test]
    fn test_lock_without_clear() {
        let mut stats = GameStats::new();
        stats.record_lock(0);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 1);
    }

    #[test]
    fn test_scores_accumulate_linearly() {
        let mut stats = GameStats::new();
        stats.record_lock(1);
        stats.record_lock(4);
        stats.record_lock(2);
        assert_eq!(stats.score(), 700);
        assert_eq!(stats.cleared_rows(), 7);
        assert_eq!(stats.locked_pieces(), 3);
    }
}
