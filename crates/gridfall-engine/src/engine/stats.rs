use crate::core::GRID_SIZE;

/// Points awarded per cleared line (row or column).
pub const POINTS_PER_LINE: usize = 100;

/// Maximum lines a single placement can clear (all rows plus all columns).
pub const MAX_LINES_PER_PLACEMENT: usize = GRID_SIZE * 2;

/// Running statistics for one session.
///
/// Tracks the score along with placement counts and a histogram of how many
/// lines each placement cleared (0 up to all 8 rows plus all 8 columns).
///
/// # Example
///
/// ```
/// use gridfall_engine::SessionStats;
///
/// let mut stats = SessionStats::new();
/// stats.record_placement(2); // a row and a column in one drop
///
/// assert_eq!(stats.score(), 200);
/// assert_eq!(stats.placed_shapes(), 1);
/// assert_eq!(stats.lines_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    score: usize,
    placed_shapes: usize,
    total_cleared_lines: usize,
    lines_cleared_counter: [usize; MAX_LINES_PER_PLACEMENT + 1],
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    /// Creates a statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            placed_shapes: 0,
            total_cleared_lines: 0,
            lines_cleared_counter: [0; MAX_LINES_PER_PLACEMENT + 1],
        }
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the number of shapes placed this session.
    #[must_use]
    pub const fn placed_shapes(&self) -> usize {
        self.placed_shapes
    }

    /// Returns the total number of lines cleared this session.
    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns the histogram of lines cleared per placement.
    ///
    /// Index `n` counts the placements that cleared exactly `n` lines
    /// (rows and columns combined).
    #[must_use]
    pub const fn lines_cleared_counter(&self) -> &[usize; MAX_LINES_PER_PLACEMENT + 1] {
        &self.lines_cleared_counter
    }

    /// Records a successful placement that cleared `cleared_lines` lines.
    ///
    /// Awards `100 × cleared_lines` points. The score never decreases.
    pub const fn record_placement(&mut self, cleared_lines: usize) {
        self.placed_shapes += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.lines_cleared_counter.len() {
            self.lines_cleared_counter[cleared_lines] += 1;
        }
        self.score += POINTS_PER_LINE * cleared_lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zeroed() {
        let stats = SessionStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.placed_shapes(), 0);
        assert_eq!(stats.total_cleared_lines(), 0);
        assert!(stats.lines_cleared_counter().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_score_law() {
        let mut stats = SessionStats::new();
        stats.record_placement(0);
        assert_eq!(stats.score(), 0);
        stats.record_placement(1);
        assert_eq!(stats.score(), 100);
        stats.record_placement(3);
        assert_eq!(stats.score(), 400);
        stats.record_placement(16);
        assert_eq!(stats.score(), 2000);
    }

    #[test]
    fn test_histogram_and_totals() {
        let mut stats = SessionStats::new();
        stats.record_placement(0);
        stats.record_placement(0);
        stats.record_placement(2);
        assert_eq!(stats.placed_shapes(), 3);
        assert_eq!(stats.total_cleared_lines(), 2);
        assert_eq!(stats.lines_cleared_counter()[0], 2);
        assert_eq!(stats.lines_cleared_counter()[2], 1);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut stats = SessionStats::new();
        let mut last = 0;
        for lines in [0, 1, 0, 2, 16, 0] {
            stats.record_placement(lines);
            assert!(stats.score() >= last);
            last = stats.score();
        }
    }
}
