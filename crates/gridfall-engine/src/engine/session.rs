use std::ops::Range;

use arrayvec::ArrayVec;

use crate::{
    ContinueError,
    core::{GRID_SIZE, Grid, GridPos, Shape},
    engine::{
        stats::{POINTS_PER_LINE, SessionStats},
        tray::{DrawSeed, ShapeTray},
    },
};

/// Tunable session parameters.
///
/// The grid side length is fixed at [`GRID_SIZE`]; the remaining knobs live
/// here so tests and variants can tune them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Shapes offered per turn (tray capacity).
    pub shapes_per_turn: usize,
    /// Row region emptied as the continue bonus.
    pub continue_clear_rows: Range<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shapes_per_turn: 3,
            continue_clear_rows: GRID_SIZE / 2..GRID_SIZE,
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Placements are being accepted.
    Active,
    /// No offered shape fits anywhere; the session is over pending a
    /// continue grant or a reset.
    Terminal,
}

/// Outcome of one placement attempt.
///
/// A rejected attempt (`placed == false`) is an ordinary result, not an
/// error: the grid, tray, and score are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct PlacementResult {
    pub placed: bool,
    /// Row indices cleared by this placement, ascending.
    pub cleared_rows: ArrayVec<usize, GRID_SIZE>,
    /// Column indices cleared by this placement, ascending.
    pub cleared_cols: ArrayVec<usize, GRID_SIZE>,
    /// Points awarded: 100 per cleared line.
    pub score_gained: usize,
}

impl PlacementResult {
    /// The no-side-effect result of a rejected attempt.
    #[must_use]
    pub fn rejected() -> Self {
        Self::default()
    }
}

/// One game session: the grid, the shape tray, and the turn bookkeeping.
///
/// The session is an explicitly owned value; whatever runs the turn loop
/// holds it and serializes calls into the three mutating operations
/// ([`Self::place`], [`Self::try_continue`], [`Self::reset`]). Every
/// operation is synchronous and runs to completion.
///
/// # Example
///
/// ```
/// use gridfall_engine::{GameConfig, GameSession, GridPos};
///
/// let mut session = GameSession::new(GameConfig::default());
/// let shape = session.tray().shapes()[0];
///
/// let result = session.place(shape, GridPos::new(0, 0));
/// assert!(result.placed); // the grid is empty, anything fits at the origin
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    tray: ShapeTray,
    stats: SessionStats,
    best_score: usize,
    state: SessionState,
    config: GameConfig,
}

impl GameSession {
    /// Creates a session with a random draw seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let tray = ShapeTray::new(config.shapes_per_turn);
        Self::with_tray(config, tray)
    }

    /// Like [`Self::new`], but with a specific seed for deterministic draws.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: DrawSeed) -> Self {
        let tray = ShapeTray::with_seed(config.shapes_per_turn, seed);
        Self::with_tray(config, tray)
    }

    fn with_tray(config: GameConfig, tray: ShapeTray) -> Self {
        Self {
            grid: Grid::new(),
            tray,
            stats: SessionStats::new(),
            best_score: 0,
            state: SessionState::Active,
            config,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn tray(&self) -> &ShapeTray {
        &self.tray
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Returns the best score seen across resets of this session value.
    #[must_use]
    pub const fn best_score(&self) -> usize {
        self.best_score
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the draw seed behind the tray.
    #[must_use]
    pub const fn seed(&self) -> DrawSeed {
        self.tray.seed()
    }

    /// Folds an externally persisted best score into this session.
    ///
    /// The best score is monotonic: a stored value lower than the current
    /// one is ignored.
    pub fn restore_best_score(&mut self, stored: usize) {
        self.best_score = self.best_score.max(stored);
    }

    /// Feasibility preview for the presentation layer.
    ///
    /// Pure and side-effect free; [`Self::place`] re-validates
    /// authoritatively regardless of what the caller previewed.
    #[must_use]
    pub fn can_place(&self, shape: &Shape, origin: GridPos) -> bool {
        self.grid.can_place(shape.cells(), origin)
    }

    /// Attempts to place `shape` with its local origin at `origin`.
    ///
    /// On success the shape's cells are committed, the shape instance is
    /// removed from the tray (an instance no longer on offer is a tolerated
    /// no-op removal), completed lines are cleared and scored, an emptied
    /// tray is refilled with fresh draws, and the terminal condition is
    /// re-evaluated against the resulting offer.
    ///
    /// On rejection nothing changes and the result carries `placed == false`.
    pub fn place(&mut self, shape: Shape, origin: GridPos) -> PlacementResult {
        if !self.grid.can_place(shape.cells(), origin) {
            return PlacementResult::rejected();
        }

        self.grid.commit(shape.cells(), origin, shape.color());
        let _ = self.tray.take(shape.id());

        let clears = self.grid.clear_completed_lines();
        let score_gained = POINTS_PER_LINE * clears.total();
        self.stats.record_placement(clears.total());

        // The offer is replenished only once it is completely empty, and the
        // terminal check runs against the refilled offer.
        if self.tray.is_empty() {
            self.tray.refill();
        }
        if !self.can_place_any_shape() {
            self.state = SessionState::Terminal;
        }

        PlacementResult {
            placed: true,
            cleared_rows: clears.rows,
            cleared_cols: clears.cols,
            score_gained,
        }
    }

    /// Checks whether any offered shape fits anywhere on the grid.
    ///
    /// Exhaustive search over every (shape, origin) pair; at 8×8 with three
    /// offered shapes this is at most a few thousand cell probes.
    #[must_use]
    pub fn can_place_any_shape(&self) -> bool {
        self.tray.shapes().iter().any(|shape| {
            (0..GRID_SIZE).any(|row| {
                (0..GRID_SIZE).any(|col| {
                    #[allow(clippy::cast_possible_truncation)]
                    let origin = GridPos::new(row as i8, col as i8);
                    self.grid.can_place(shape.cells(), origin)
                })
            })
        })
    }

    /// Recovers a terminal session after an external continue grant.
    ///
    /// Empties the configured bonus row region, regenerates the full offer,
    /// and returns to [`SessionState::Active`] with the score untouched. The
    /// terminal condition is then re-evaluated; a grid still locked even
    /// after the bonus drops the session straight back to terminal.
    ///
    /// # Errors
    ///
    /// Returns [`ContinueError`] when the session is still active.
    pub fn try_continue(&mut self) -> Result<(), ContinueError> {
        if self.state.is_active() {
            return Err(ContinueError);
        }

        self.grid.clear_rows(self.config.continue_clear_rows.clone());
        self.tray.refill();
        self.state = SessionState::Active;
        if !self.can_place_any_shape() {
            self.state = SessionState::Terminal;
        }
        Ok(())
    }

    /// Starts a new game: folds the score into the best score, empties the
    /// grid, zeroes the statistics, regenerates the offer, and returns to
    /// [`SessionState::Active`]. Valid from any state.
    pub fn reset(&mut self) {
        self.best_score = self.best_score.max(self.stats.score());
        self.grid.clear_all();
        self.stats = SessionStats::new();
        self.tray.refill();
        self.state = SessionState::Active;
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn tray_mut(&mut self) -> &mut ShapeTray {
        &mut self.tray
    }
}
