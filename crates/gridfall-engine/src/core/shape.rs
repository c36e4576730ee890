use serde::{Deserialize, Serialize};

/// Color of a placed block.
///
/// The palette is fixed; every catalog entry carries one of these colors and
/// the grid stores them per occupied cell. Colors have no effect on game
/// rules, only on presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum BlockColor {
    /// Red block.
    Red = 1,
    /// Blue block.
    Blue = 2,
    /// Green block.
    Green = 3,
    /// Yellow block.
    Yellow = 4,
    /// Orange block.
    Orange = 5,
    /// Purple block.
    Purple = 6,
}

impl BlockColor {
    /// Number of palette colors (6).
    pub const LEN: usize = 6;

    /// Returns the compact cell code for this color (1..=6).
    ///
    /// Code `0` is reserved for an empty cell in flat grid exports.
    #[must_use]
    pub const fn as_code(self) -> u8 {
        self as u8
    }

    /// Parses a color from its compact cell code.
    ///
    /// Returns `None` for `0` (empty) and for codes outside the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_engine::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_code(2), Some(BlockColor::Blue));
    /// assert_eq!(BlockColor::from_code(0), None);
    /// assert_eq!(BlockColor::from_code(9), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(BlockColor::Red),
            2 => Some(BlockColor::Blue),
            3 => Some(BlockColor::Green),
            4 => Some(BlockColor::Yellow),
            5 => Some(BlockColor::Orange),
            6 => Some(BlockColor::Purple),
            _ => None,
        }
    }

    /// Returns the single character representation of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_engine::BlockColor;
    ///
    /// assert_eq!(BlockColor::Red.as_char(), 'R');
    /// assert_eq!(BlockColor::Purple.as_char(), 'P');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            BlockColor::Red => 'R',
            BlockColor::Blue => 'B',
            BlockColor::Green => 'G',
            BlockColor::Yellow => 'Y',
            BlockColor::Orange => 'O',
            BlockColor::Purple => 'P',
        }
    }

    /// Parses a color from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(BlockColor::Red),
            'B' => Some(BlockColor::Blue),
            'G' => Some(BlockColor::Green),
            'Y' => Some(BlockColor::Yellow),
            'O' => Some(BlockColor::Orange),
            'P' => Some(BlockColor::Purple),
            _ => None,
        }
    }
}

/// A grid coordinate pair.
///
/// Used both as an absolute position on the grid and as a relative offset
/// within a shape (measured from the shape's local origin at `(0, 0)`).
/// Coordinates are signed so that an out-of-range origin coming from a drag
/// gesture is representable and can be rejected by a bounds check instead of
/// wrapping or panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GridPos {
    /// Row index, top to bottom.
    pub row: i8,
    /// Column index, left to right.
    pub col: i8,
}

impl GridPos {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// Identity of a drawn shape instance.
///
/// The catalog intentionally contains duplicate pattern/color entries, so a
/// shape on offer cannot be identified by its cells or color. Every draw from
/// the tray mints a fresh id, and tray removal matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ShapeId(pub u32);

/// A catalog entry: the static definition a drawn [`Shape`] is minted from.
///
/// `cells` holds the occupied offsets relative to the shape's local origin;
/// `size` is the maximum extent (rows or columns) and is used only for
/// preview layout, never for placement logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub color: BlockColor,
    pub cells: &'static [GridPos],
    pub size: u8,
}

/// A placeable shape instance drawn from the catalog.
///
/// Equality is by [`ShapeId`] only: two draws of the same catalog entry are
/// distinct shapes, matching the per-instance identity of the tray.
///
/// # Example
///
/// ```
/// use gridfall_engine::{GameConfig, GameSession};
///
/// let session = GameSession::new(GameConfig::default());
/// let offered = session.tray().shapes();
/// assert_eq!(offered.len(), 3);
/// // Instances are unique even when the same catalog entry was drawn twice.
/// assert_ne!(offered[0].id(), offered[1].id());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    id: ShapeId,
    color: BlockColor,
    cells: &'static [GridPos],
    size: u8,
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shape {}

impl Shape {
    /// Mints a shape instance from a catalog template.
    #[must_use]
    pub const fn from_template(id: ShapeId, template: &'static ShapeTemplate) -> Self {
        Self {
            id,
            color: template.color,
            cells: template.cells,
            size: template.size,
        }
    }

    /// Returns the per-instance identity of this shape.
    #[must_use]
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub const fn color(&self) -> BlockColor {
        self.color
    }

    /// Returns the occupied offsets relative to the shape's local origin.
    #[must_use]
    pub const fn cells(&self) -> &'static [GridPos] {
        self.cells
    }

    /// Returns the number of cells this shape occupies.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the maximum extent of the shape (preview layout only).
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CATALOG;

    #[test]
    fn test_color_code_roundtrip() {
        for color in [
            BlockColor::Red,
            BlockColor::Blue,
            BlockColor::Green,
            BlockColor::Yellow,
            BlockColor::Orange,
            BlockColor::Purple,
        ] {
            assert_eq!(BlockColor::from_code(color.as_code()), Some(color));
            assert_eq!(BlockColor::from_char(color.as_char()), Some(color));
        }
        assert_eq!(BlockColor::from_code(0), None);
        assert_eq!(BlockColor::from_code(7), None);
        assert_eq!(BlockColor::from_char('X'), None);
    }

    #[test]
    fn test_shape_equality_is_by_id() {
        // Two instances of the same template with different ids are distinct.
        let a = Shape::from_template(ShapeId(1), &CATALOG[0]);
        let b = Shape::from_template(ShapeId(2), &CATALOG[0]);
        assert_ne!(a, b);

        // Same id compares equal regardless of template.
        let c = Shape::from_template(ShapeId(1), &CATALOG[5]);
        assert_eq!(a, c);
    }

    #[test]
    fn test_shape_exposes_template_data() {
        let shape = Shape::from_template(ShapeId(0), &CATALOG[0]);
        assert_eq!(shape.color(), CATALOG[0].color);
        assert_eq!(shape.cells(), CATALOG[0].cells);
        assert_eq!(shape.size(), CATALOG[0].size);
        assert_eq!(shape.cell_count(), CATALOG[0].cells.len());
    }
}
