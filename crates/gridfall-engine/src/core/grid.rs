use std::ops::Range;

use arrayvec::ArrayVec;

use super::shape::{BlockColor, GridPos};

/// Side length of the square playing field.
pub const GRID_SIZE: usize = 8;

/// A single cell: empty, or occupied by a colored block.
pub type Cell = Option<BlockColor>;

/// Row and column indices cleared by one line-clearing pass.
///
/// Both lists are ascending. A cell at the intersection of a cleared row and
/// a cleared column is counted in both lists but cleared once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClears {
    pub rows: ArrayVec<usize, GRID_SIZE>,
    pub cols: ArrayVec<usize, GRID_SIZE>,
}

impl LineClears {
    /// Total number of cleared lines (rows plus columns).
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The 8×8 playing field.
///
/// Cells are mutated only by a committed placement and by line clearing (plus
/// the bulk clears backing reset and the continue bonus); every access is
/// bounds-checked through [`GridPos`] validation.
///
/// # Example
///
/// ```
/// use gridfall_engine::{Grid, GridPos};
///
/// let grid = Grid::new();
/// assert_eq!(grid.occupied_cells(), 0);
/// assert_eq!(grid.get(GridPos::new(8, 0)), None); // out of bounds
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Resolves `origin + offset` to validated array indices.
    ///
    /// Returns `None` when the absolute position falls outside the grid on
    /// either axis. Arithmetic is widened so extreme origins cannot wrap.
    fn index(origin: GridPos, offset: GridPos) -> Option<(usize, usize)> {
        let row = i16::from(origin.row) + i16::from(offset.row);
        let col = i16::from(origin.col) + i16::from(offset.col);
        let side = i16::try_from(GRID_SIZE).ok()?;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some((row.unsigned_abs().into(), col.unsigned_abs().into()))
        } else {
            None
        }
    }

    /// Returns the cell at `pos`, or `None` when `pos` is out of bounds.
    #[must_use]
    pub fn get(&self, pos: GridPos) -> Option<Cell> {
        Self::index(pos, GridPos::new(0, 0)).map(|(r, c)| self.rows[r][c])
    }

    /// Checks whether a shape's cells can all be placed with the shape's
    /// local origin mapped to `origin`.
    ///
    /// Pure predicate: any out-of-bounds or occupied target cell means
    /// `false`, with no distinction between the two and no side effects.
    #[must_use]
    pub fn can_place(&self, cells: &[GridPos], origin: GridPos) -> bool {
        cells.iter().all(|&offset| {
            Self::index(origin, offset).is_some_and(|(r, c)| self.rows[r][c].is_none())
        })
    }

    /// Writes `color` into every cell addressed by the shape.
    ///
    /// Precondition: [`Self::can_place`] holds for the same arguments. A
    /// violation is a logic error in the caller; the grid is left untouched
    /// rather than partially written.
    pub fn commit(&mut self, cells: &[GridPos], origin: GridPos, color: BlockColor) {
        debug_assert!(
            self.can_place(cells, origin),
            "commit called without a successful can_place check"
        );
        if !self.can_place(cells, origin) {
            return;
        }
        for &offset in cells {
            if let Some((r, c)) = Self::index(origin, offset) {
                self.rows[r][c] = Some(color);
            }
        }
    }

    /// Checks whether every cell of row `row` is occupied.
    #[must_use]
    pub fn row_is_complete(&self, row: usize) -> bool {
        row < GRID_SIZE && self.rows[row].iter().all(Option::is_some)
    }

    /// Checks whether every cell of column `col` is occupied.
    #[must_use]
    pub fn col_is_complete(&self, col: usize) -> bool {
        col < GRID_SIZE && self.rows.iter().all(|row| row[col].is_some())
    }

    /// Clears every complete row and every complete column in one pass.
    ///
    /// Completion is evaluated for both axes against the grid as it stands
    /// when the pass begins; only then are the clears applied. Clearing a row
    /// therefore never suppresses (or enables) a column clear in the same
    /// pass, and an intersection cell is cleared exactly once.
    pub fn clear_completed_lines(&mut self) -> LineClears {
        let rows: ArrayVec<usize, GRID_SIZE> =
            (0..GRID_SIZE).filter(|&r| self.row_is_complete(r)).collect();
        let cols: ArrayVec<usize, GRID_SIZE> =
            (0..GRID_SIZE).filter(|&c| self.col_is_complete(c)).collect();

        for &r in &rows {
            self.rows[r] = [None; GRID_SIZE];
        }
        for &c in &cols {
            for row in &mut self.rows {
                row[c] = None;
            }
        }

        LineClears { rows, cols }
    }

    /// Empties a contiguous range of rows (the continue bonus region).
    ///
    /// Rows outside the grid are ignored.
    pub fn clear_rows(&mut self, rows: Range<usize>) {
        for r in rows {
            if r < GRID_SIZE {
                self.rows[r] = [None; GRID_SIZE];
            }
        }
    }

    /// Empties the whole grid.
    pub fn clear_all(&mut self) {
        self.rows = [[None; GRID_SIZE]; GRID_SIZE];
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.rows.iter()
    }

    /// Exports the grid as compact cell codes (0 = empty, 1..=6 = colors).
    #[must_use]
    pub fn as_codes(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (out_row, row) in out.iter_mut().zip(&self.rows) {
            for (out_cell, cell) in out_row.iter_mut().zip(row) {
                *out_cell = cell.map_or(0, BlockColor::as_code);
            }
        }
        out
    }

    /// Creates a `Grid` from ASCII art for tests and fixtures.
    ///
    /// `.` is an empty cell; a palette letter (`R`, `B`, `G`, `Y`, `O`, `P`)
    /// is a block of that color, and `#` is shorthand for a blue block. Rows
    /// are given top to bottom; every row must have exactly 8 cells.
    ///
    /// # Panics
    ///
    /// Panics on malformed art (wrong row width, unknown characters).
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut grid = Self::new();
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();

        for (r, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(
                chars.len(),
                GRID_SIZE,
                "each row must have exactly {GRID_SIZE} cells, got {} at row {r}",
                chars.len(),
            );
            for (c, &ch) in chars.iter().enumerate() {
                grid.rows[r][c] = match ch {
                    '.' => None,
                    '#' => Some(BlockColor::Blue),
                    _ => Some(
                        BlockColor::from_char(ch)
                            .unwrap_or_else(|| panic!("unknown cell character {ch:?}")),
                    ),
                };
            }
        }
        grid
    }
}
