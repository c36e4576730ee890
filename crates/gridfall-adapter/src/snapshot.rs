use gridfall_engine::{GRID_SIZE, GameSession, GridPos, Shape};
use serde::{Deserialize, Serialize};

/// One offered shape, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShapeView {
    /// Per-instance id; pass it back in a place command.
    pub id: u32,
    /// Compact color code (1..=6).
    pub color: u8,
    /// Occupied offsets relative to the shape's local origin.
    pub cells: Vec<GridPos>,
    /// Maximum extent, for preview layout.
    pub size: u8,
}

impl From<&Shape> for ShapeView {
    fn from(shape: &Shape) -> Self {
        Self {
            id: shape.id().0,
            color: shape.color().as_code(),
            cells: shape.cells().to_vec(),
            size: shape.size(),
        }
    }
}

/// A complete view of the session at one revision.
///
/// Snapshots are plain data: taking one never mutates the session, and two
/// snapshots with the same `revision` are identical. A presentation layer
/// polls [`crate::GameHandle::revision`] and re-renders from a fresh snapshot
/// when the number has moved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameSnapshot {
    /// Monotonic change counter, bumped by every state-changing command.
    pub revision: u64,
    /// Cell codes, row-major, top to bottom (0 = empty, 1..=6 = colors).
    pub grid: [[u8; GRID_SIZE]; GRID_SIZE],
    /// Shapes currently on offer, in tray order.
    pub tray: Vec<ShapeView>,
    pub score: usize,
    pub best_score: usize,
    /// True once no offered shape fits anywhere.
    pub game_over: bool,
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(session: &GameSession, revision: u64) -> Self {
        Self {
            revision,
            grid: session.grid().as_codes(),
            tray: session.tray().shapes().iter().map(ShapeView::from).collect(),
            score: session.score(),
            best_score: session.best_score(),
            game_over: session.state().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use gridfall_engine::GameConfig;

    use super::*;

    #[test]
    fn test_capture_reflects_a_fresh_session() {
        let session = GameSession::new(GameConfig::default());
        let snapshot = GameSnapshot::capture(&session, 0);

        assert_eq!(snapshot.revision, 0);
        assert_eq!(snapshot.grid, [[0; GRID_SIZE]; GRID_SIZE]);
        assert_eq!(snapshot.tray.len(), 3);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.best_score, 0);
        assert!(!snapshot.game_over);

        for view in &snapshot.tray {
            assert!((1..=6).contains(&view.color));
            assert!(!view.cells.is_empty());
        }
    }

    #[test]
    fn test_capture_is_pure() {
        let session = GameSession::new(GameConfig::default());
        let first = GameSnapshot::capture(&session, 7);
        let second = GameSnapshot::capture(&session, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = GameSession::new(GameConfig::default());
        let snapshot = GameSnapshot::capture(&session, 3);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
