use gridfall_engine::{
    ContinueError, DrawSeed, GameConfig, GameSession, GridPos, PlacementResult, Shape, ShapeId,
};

use crate::{
    snapshot::GameSnapshot,
    store::{BEST_SCORE_KEY, ScoreStore},
};

/// The presentation-facing handle around one [`GameSession`].
///
/// The handle owns the session and a [`ScoreStore`]. Shapes cross the
/// boundary as the raw ids published in snapshots, so a renderer never holds
/// engine types; stale or unknown ids degrade to a rejected placement. State
/// is observed by polling: every state-changing command bumps a monotonic
/// revision counter, and a caller that sees the counter move re-renders from
/// a fresh [`GameSnapshot`].
///
/// # Example
///
/// ```
/// use gridfall_adapter::{GameHandle, MemoryScoreStore};
/// use gridfall_engine::{GameConfig, GridPos};
///
/// let mut handle = GameHandle::new(GameConfig::default(), MemoryScoreStore::new());
/// let snapshot = handle.snapshot();
///
/// let result = handle.place(snapshot.tray[0].id, GridPos::new(0, 0));
/// assert!(result.placed);
/// assert_eq!(handle.revision(), snapshot.revision + 1);
/// ```
#[derive(Debug)]
pub struct GameHandle<S: ScoreStore> {
    session: GameSession,
    store: S,
    revision: u64,
}

impl<S: ScoreStore> GameHandle<S> {
    /// Creates a handle with a random draw seed, restoring the persisted
    /// best score from `store`.
    #[must_use]
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::from_session(GameSession::new(config), store)
    }

    /// Like [`Self::new`], but with a specific seed for deterministic draws.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: DrawSeed, store: S) -> Self {
        Self::from_session(GameSession::with_seed(config, seed), store)
    }

    fn from_session(mut session: GameSession, store: S) -> Self {
        if let Some(best) = store.get(BEST_SCORE_KEY) {
            session.restore_best_score(best);
        }
        Self {
            session,
            store,
            revision: 0,
        }
    }

    /// Returns the current change counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Captures a full view of the session at the current revision.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.session, self.revision)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Feasibility preview for drag feedback.
    ///
    /// An id not currently on offer reads as unplaceable.
    #[must_use]
    pub fn can_place(&self, shape_id: u32, origin: GridPos) -> bool {
        self.offered(shape_id)
            .is_some_and(|shape| self.session.can_place(&shape, origin))
    }

    /// Places the offered shape `shape_id` at `origin`.
    ///
    /// An unknown id, like an infeasible origin, yields a rejected result
    /// with no state change. The revision is bumped only when the placement
    /// lands.
    pub fn place(&mut self, shape_id: u32, origin: GridPos) -> PlacementResult {
        let Some(shape) = self.offered(shape_id) else {
            return PlacementResult::rejected();
        };
        let result = self.session.place(shape, origin);
        if result.placed {
            self.revision += 1;
        }
        result
    }

    /// Applies an externally granted continue to a terminal session.
    ///
    /// # Errors
    ///
    /// Returns [`ContinueError`] when the session is still active; the
    /// revision is untouched.
    pub fn try_continue(&mut self) -> Result<(), ContinueError> {
        self.session.try_continue()?;
        self.revision += 1;
        Ok(())
    }

    /// Starts a new game and persists the (possibly updated) best score.
    pub fn reset(&mut self) {
        self.session.reset();
        self.store.set(BEST_SCORE_KEY, self.session.best_score());
        self.revision += 1;
    }

    /// Alias for [`Self::reset`], named for the button that triggers it.
    pub fn start_new_game(&mut self) {
        self.reset();
    }

    fn offered(&self, shape_id: u32) -> Option<Shape> {
        self.session
            .tray()
            .shapes()
            .iter()
            .find(|shape| shape.id() == ShapeId(shape_id))
            .copied()
    }
}
