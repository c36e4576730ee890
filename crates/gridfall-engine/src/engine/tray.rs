use std::fmt::Write as _;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{Shape, ShapeId, catalog};

/// Seed for deterministic shape draws.
///
/// A 128-bit (16-byte) seed initializing the random number generator behind
/// the tray. The same seed produces the same sequence of drawn shapes,
/// enabling:
///
/// - Reproducible sessions for debugging
/// - Deterministic testing
///
/// # Example
///
/// ```
/// use gridfall_engine::{DrawSeed, GameConfig, GameSession};
/// use rand::Rng as _;
///
/// let seed: DrawSeed = rand::rng().random();
///
/// let a = GameSession::with_seed(GameConfig::default(), seed);
/// let b = GameSession::with_seed(GameConfig::default(), seed);
///
/// // Both sessions offer the same shapes.
/// let colors = |s: &GameSession| {
///     s.tray()
///         .shapes()
///         .iter()
///         .map(|shape| shape.color())
///         .collect::<Vec<_>>()
/// };
/// assert_eq!(colors(&a), colors(&b));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DrawSeed([u8; 16]);

impl Serialize for DrawSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num = u128::from_be_bytes(self.0);
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{num:032x}").unwrap();
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for DrawSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        let num = u128::from_str_radix(&hex_str, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid hex: {hex_str} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `DrawSeed` values with `rng.random()`.
impl Distribution<DrawSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DrawSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DrawSeed(seed)
    }
}

/// The ordered set of shapes currently on offer.
///
/// The tray draws from the catalog with a seeded RNG and mints a fresh
/// [`ShapeId`] per draw, so two draws of the same catalog entry are distinct
/// instances. Shapes are removed individually by id; the offer is replaced
/// wholesale by [`Self::refill`], which the session triggers only once the
/// tray is completely empty.
#[derive(Debug, Clone)]
pub struct ShapeTray {
    rng: Pcg32,
    seed: DrawSeed,
    next_id: u32,
    capacity: usize,
    offered: Vec<Shape>,
}

impl ShapeTray {
    /// Creates a tray with a random seed, filled to `capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_seed(capacity, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic draws.
    #[must_use]
    pub fn with_seed(capacity: usize, seed: DrawSeed) -> Self {
        let mut this = Self {
            rng: Pcg32::from_seed(seed.0),
            seed,
            next_id: 0,
            capacity,
            offered: Vec::with_capacity(capacity),
        };
        this.refill();
        this
    }

    fn draw(&mut self) -> Shape {
        let template = catalog::draw_template(&mut self.rng);
        let id = ShapeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Shape::from_template(id, template)
    }

    /// Replaces the offer with a full capacity of fresh draws.
    pub fn refill(&mut self) {
        self.offered.clear();
        for _ in 0..self.capacity {
            let shape = self.draw();
            self.offered.push(shape);
        }
    }

    /// Removes and returns the shape with the given id.
    ///
    /// An id not currently on offer is tolerated: the tray is left untouched
    /// and `None` is returned.
    pub fn take(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.offered.iter().position(|shape| shape.id() == id)?;
        Some(self.offered.remove(index))
    }

    /// Returns the shapes currently on offer, in order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.offered
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offered.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offered.len()
    }

    /// Returns the seed this tray was created with.
    #[must_use]
    pub const fn seed(&self) -> DrawSeed {
        self.seed
    }

    #[cfg(test)]
    pub(crate) fn set_offer(&mut self, shapes: Vec<Shape>) {
        self.offered = shapes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_from_bytes(bytes: [u8; 16]) -> DrawSeed {
        DrawSeed(bytes)
    }

    mod draw_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: DrawSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: DrawSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed.0, deserialized.0);
        }

        #[test]
        fn test_format_is_32_char_hex_string() {
            let seed: DrawSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let hex_str = serialized.trim_matches('"');
            assert_eq!(hex_str.len(), 32);
            assert!(hex_str.chars().all(|c| c.is_ascii_hexdigit()));
        }

        #[test]
        fn test_known_value_all_zeros() {
            let seed = seed_from_bytes([0u8; 16]);
            let serialized = serde_json::to_string(&seed).unwrap();
            assert_eq!(serialized, "\"00000000000000000000000000000000\"");
            let deserialized: DrawSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(deserialized.0, [0u8; 16]);
        }

        #[test]
        fn test_error_invalid_hex() {
            for json in [
                "\"ghijklmnopqrstuvwxyzghijklmnopqr\"",
                "\"0123456789abcdef\"",
                "\"\"",
            ] {
                let result: Result<DrawSeed, _> = serde_json::from_str(json);
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("invalid hex"));
            }
        }

        #[test]
        fn test_serialize_deserialize_preserves_draw_sequence() {
            let seed: DrawSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: DrawSeed = serde_json::from_str(&serialized).unwrap();

            let mut tray1 = ShapeTray::with_seed(3, seed);
            let mut tray2 = ShapeTray::with_seed(3, deserialized);
            for _ in 0..20 {
                let contents = |t: &ShapeTray| {
                    t.shapes()
                        .iter()
                        .map(|s| (s.color(), s.cells()))
                        .collect::<Vec<_>>()
                };
                assert_eq!(contents(&tray1), contents(&tray2));
                tray1.refill();
                tray2.refill();
            }
        }
    }

    #[test]
    fn test_tray_fills_to_capacity() {
        let tray = ShapeTray::with_seed(3, seed_from_bytes([1; 16]));
        assert_eq!(tray.len(), 3);
        assert!(!tray.is_empty());
    }

    #[test]
    fn test_instance_ids_are_unique_across_refills() {
        let mut tray = ShapeTray::with_seed(3, seed_from_bytes([2; 16]));
        let mut seen = Vec::new();
        for _ in 0..10 {
            for shape in tray.shapes() {
                assert!(!seen.contains(&shape.id()));
                seen.push(shape.id());
            }
            tray.refill();
        }
    }

    #[test]
    fn test_take_removes_exactly_one_instance() {
        let mut tray = ShapeTray::with_seed(3, seed_from_bytes([3; 16]));
        let target = tray.shapes()[1];
        let taken = tray.take(target.id());
        assert_eq!(taken, Some(target));
        assert_eq!(tray.len(), 2);
        assert!(tray.shapes().iter().all(|s| s.id() != target.id()));
    }

    #[test]
    fn test_take_of_missing_id_is_a_no_op() {
        let mut tray = ShapeTray::with_seed(3, seed_from_bytes([4; 16]));
        let before: Vec<_> = tray.shapes().iter().map(Shape::id).collect();
        assert_eq!(tray.take(ShapeId(9999)), None);
        let after: Vec<_> = tray.shapes().iter().map(Shape::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_refill_replaces_the_whole_offer() {
        let mut tray = ShapeTray::with_seed(3, seed_from_bytes([5; 16]));
        let first = tray.shapes()[0];
        tray.take(first.id());
        tray.refill();
        assert_eq!(tray.len(), 3);
        assert!(tray.shapes().iter().all(|s| s.id() != first.id()));
    }
}
