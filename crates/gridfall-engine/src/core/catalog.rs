//! The fixed population of placeable shapes.
//!
//! The catalog is a flat, static table sampled uniformly with replacement.
//! Several entries are deliberate duplicates: repeating an entry doubles its
//! draw frequency, and that duplication is the difficulty/variety tuning of
//! the game. Do not collapse duplicates into a weight table; the flat list is
//! the tuning mechanism.

use rand::{Rng, seq::IndexedRandom as _};

use super::shape::{BlockColor, GridPos, ShapeTemplate};

const fn p(row: i8, col: i8) -> GridPos {
    GridPos::new(row, col)
}

const VERTICAL_BAR_4: &[GridPos] = &[p(0, 0), p(1, 0), p(2, 0), p(3, 0)];
const VERTICAL_BAR_2: &[GridPos] = &[p(0, 0), p(1, 0)];
const HORIZONTAL_BAR_4: &[GridPos] = &[p(0, 0), p(0, 1), p(0, 2), p(0, 3)];
const HORIZONTAL_BAR_2: &[GridPos] = &[p(0, 0), p(0, 1)];
const SQUARE_2: &[GridPos] = &[p(0, 0), p(0, 1), p(1, 0), p(1, 1)];
#[rustfmt::skip]
const SQUARE_3: &[GridPos] = &[
    p(0, 0), p(0, 1), p(0, 2),
    p(1, 0), p(1, 1), p(1, 2),
    p(2, 0), p(2, 1), p(2, 2),
];
const ELL: &[GridPos] = &[p(0, 0), p(1, 0), p(2, 0), p(2, 1)];
const ELL_FLIPPED: &[GridPos] = &[p(0, 1), p(1, 1), p(2, 1), p(2, 0)];
const TEE: &[GridPos] = &[p(0, 1), p(1, 0), p(1, 1), p(1, 2)];
const ESS: &[GridPos] = &[p(0, 1), p(0, 2), p(1, 0), p(1, 1)];
const ZED: &[GridPos] = &[p(0, 0), p(0, 1), p(1, 1), p(1, 2)];
const ZED_VERTICAL: &[GridPos] = &[p(0, 1), p(1, 0), p(1, 1), p(2, 0)];
const CEE: &[GridPos] = &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)];
const DOT: &[GridPos] = &[p(0, 0)];

const fn entry(color: BlockColor, cells: &'static [GridPos], size: u8) -> ShapeTemplate {
    ShapeTemplate { color, cells, size }
}

/// The full weighted shape population.
///
/// Duplicated entries (bars, squares, dots) are drawn twice as often as the
/// singletons; the table mirrors the shipped tuning entry for entry.
pub static CATALOG: [ShapeTemplate; 20] = [
    // Vertical bar (4) - 2x
    entry(BlockColor::Blue, VERTICAL_BAR_4, 4),
    entry(BlockColor::Blue, VERTICAL_BAR_4, 4),
    // Vertical bar (2)
    entry(BlockColor::Red, VERTICAL_BAR_2, 2),
    // Horizontal bar (4) - 2x
    entry(BlockColor::Blue, HORIZONTAL_BAR_4, 4),
    entry(BlockColor::Blue, HORIZONTAL_BAR_4, 4),
    // Horizontal bar (2) - 2x
    entry(BlockColor::Red, HORIZONTAL_BAR_2, 2),
    entry(BlockColor::Red, HORIZONTAL_BAR_2, 2),
    // Square (2x2) - 2x
    entry(BlockColor::Yellow, SQUARE_2, 2),
    entry(BlockColor::Yellow, SQUARE_2, 2),
    // Square (3x3) - 2x
    entry(BlockColor::Green, SQUARE_3, 3),
    entry(BlockColor::Green, SQUARE_3, 3),
    // L
    entry(BlockColor::Green, ELL, 3),
    // L (flipped)
    entry(BlockColor::Purple, ELL_FLIPPED, 3),
    // T
    entry(BlockColor::Purple, TEE, 3),
    // S
    entry(BlockColor::Red, ESS, 3),
    // Z
    entry(BlockColor::Orange, ZED, 3),
    // Z (vertical)
    entry(BlockColor::Orange, ZED_VERTICAL, 3),
    // C
    entry(BlockColor::Blue, CEE, 3),
    // Single block (dot) - 2x
    entry(BlockColor::Blue, DOT, 1),
    entry(BlockColor::Blue, DOT, 1),
];

/// Draws one template uniformly (with replacement) from the catalog.
///
/// # Panics
///
/// Never panics: the catalog is non-empty by construction.
pub fn draw_template<R: Rng + ?Sized>(rng: &mut R) -> &'static ShapeTemplate {
    CATALOG
        .choose(rng)
        .expect("the shape catalog is never empty")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_catalog_offsets_are_non_negative_and_within_size() {
        for template in &CATALOG {
            assert!(!template.cells.is_empty());
            for cell in template.cells {
                assert!(cell.row >= 0 && cell.col >= 0);
                assert!(cell.row < i8::try_from(template.size).unwrap());
                assert!(cell.col < i8::try_from(template.size).unwrap());
            }
        }
    }

    #[test]
    fn test_catalog_has_no_duplicate_offsets_within_an_entry() {
        for template in &CATALOG {
            for (i, a) in template.cells.iter().enumerate() {
                for b in &template.cells[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_duplicated_entries_are_draw_frequency_tuning() {
        // The flat table is the tuning mechanism: duplicated entries must
        // stay duplicated, not be collapsed into a weight somewhere.
        let count =
            |cells: &'static [GridPos]| CATALOG.iter().filter(|t| t.cells == cells).count();
        assert_eq!(count(VERTICAL_BAR_4), 2);
        assert_eq!(count(VERTICAL_BAR_2), 1);
        assert_eq!(count(HORIZONTAL_BAR_4), 2);
        assert_eq!(count(HORIZONTAL_BAR_2), 2);
        assert_eq!(count(SQUARE_2), 2);
        assert_eq!(count(SQUARE_3), 2);
        assert_eq!(count(DOT), 2);
        assert_eq!(CATALOG.len(), 20);
    }

    #[test]
    fn test_draws_are_deterministic_per_seed() {
        let mut rng1 = Pcg32::seed_from_u64(42);
        let mut rng2 = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(draw_template(&mut rng1), draw_template(&mut rng2));
        }
    }

    #[test]
    fn test_every_entry_is_eventually_drawn() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = vec![false; CATALOG.len()];
        for _ in 0..10_000 {
            let drawn = draw_template(&mut rng);
            // Duplicates are value-equal, so mark every matching slot.
            for (slot, template) in seen.iter_mut().zip(&CATALOG) {
                if template == drawn {
                    *slot = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
