//! Weighted discrete-outcome source ("die").
//!
//! A [`Die`] holds a fixed list of distinct faces and a mutable, non-negative
//! weight per face. Sampling draws with replacement, with probability
//! proportional to the current weights. Weights need not sum to 1; the
//! weighted distribution normalizes at draw time.

use std::fmt::Debug;

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{DiceError, Result};

/// Face value of a die: any cloneable type with value equality and a total
/// order (numbers, strings, chars, ...). The order is what combination and
/// permutation grouping sort by.
pub trait Face: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Face for T {}

/// A weighted die with a fixed face list.
///
/// The face list never changes after construction. Weights default to 1.0
/// per face and can be changed one face at a time via [`Die::set_weight`].
#[derive(Clone, Debug)]
pub struct Die<T: Face> {
    faces: Vec<T>,
    weights: Vec<f64>,
}

impl Die<u32> {
    /// A standard six-sided die with faces 1..=6, all weights 1.0.
    pub fn standard() -> Self {
        Self::new((1..=6).collect()).expect("1..=6 faces are distinct")
    }
}

impl<T: Face> Die<T> {
    /// Build a die from an ordered list of distinct faces, each with
    /// weight 1.0. Fails with [`DiceError::DuplicateFace`] if any two faces
    /// compare equal.
    pub fn new(faces: Vec<T>) -> Result<Self> {
        let mut seen: Vec<&T> = Vec::with_capacity(faces.len());
        for face in &faces {
            if seen.contains(&face) {
                return Err(DiceError::DuplicateFace(format!("{face:?}")));
            }
            seen.push(face);
        }
        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// The face list, in declaration order.
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    /// Replace the weight of a single face. Other faces are untouched.
    ///
    /// Fails with [`DiceError::UnknownFace`] if the face is not on this die,
    /// and with [`DiceError::InvalidWeight`] for negative or non-finite
    /// weights. Zero is allowed: a zero-weight face is never drawn.
    pub fn set_weight(&mut self, face: &T, weight: f64) -> Result<()> {
        let idx = self
            .faces
            .iter()
            .position(|f| f == face)
            .ok_or_else(|| DiceError::UnknownFace(format!("{face:?}")))?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(DiceError::InvalidWeight {
                face: format!("{face:?}"),
                weight,
            });
        }
        self.weights[idx] = weight;
        Ok(())
    }

    /// Draw `n` faces with replacement using the given RNG, proportional to
    /// the current weights. Never mutates the die.
    ///
    /// Fails with [`DiceError::ZeroWeightSum`] when every weight is zero
    /// (the draw distribution is undefined).
    pub fn sample_rng<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<T>> {
        // set_weight guarantees finite non-negative weights, so the only
        // way WeightedIndex can fail here is an all-zero weight vector.
        let dist = WeightedIndex::new(self.weights.iter().copied())
            .map_err(|_| DiceError::ZeroWeightSum)?;
        Ok((0..n).map(|_| self.faces[dist.sample(rng)].clone()).collect())
    }

    /// Like [`Die::sample_rng`] with a fresh OS-seeded [`SmallRng`].
    pub fn sample(&self, n: usize) -> Result<Vec<T>> {
        let mut rng = SmallRng::from_os_rng();
        self.sample_rng(n, &mut rng)
    }

    /// Copy of the current face → weight mapping, in declaration order.
    pub fn snapshot(&self) -> Vec<(T, f64)> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_distinct_faces() {
        let die = Die::new(vec!["H", "T"]).unwrap();
        assert_eq!(die.faces(), &["H", "T"]);
        assert_eq!(die.snapshot(), vec![("H", 1.0), ("T", 1.0)]);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Die::new(vec![1, 2, 2, 3]).unwrap_err();
        assert!(matches!(err, DiceError::DuplicateFace(_)));
    }

    #[test]
    fn test_standard_die() {
        let die = Die::standard();
        assert_eq!(die.faces(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_set_weight_updates_only_target() {
        let mut die = Die::standard();
        die.set_weight(&3, 5.0).unwrap();
        let snap = die.snapshot();
        assert_eq!(snap[2], (3, 5.0));
        for (face, w) in snap {
            if face != 3 {
                assert_eq!(w, 1.0);
            }
        }
    }

    #[test]
    fn test_set_weight_unknown_face() {
        let mut die = Die::standard();
        let err = die.set_weight(&7, 2.0).unwrap_err();
        assert!(matches!(err, DiceError::UnknownFace(_)));
    }

    #[test]
    fn test_set_weight_rejects_negative_and_nan() {
        let mut die = Die::standard();
        assert!(matches!(
            die.set_weight(&1, -1.0),
            Err(DiceError::InvalidWeight { .. })
        ));
        assert!(matches!(
            die.set_weight(&1, f64::NAN),
            Err(DiceError::InvalidWeight { .. })
        ));
        // Failed updates leave the die unchanged
        assert_eq!(die.snapshot()[0], (1, 1.0));
    }

    #[test]
    fn test_sample_length_and_domain() {
        let die = Die::new(vec!["a", "b", "c"]).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let draws = die.sample_rng(100, &mut rng).unwrap();
        assert_eq!(draws.len(), 100);
        for d in &draws {
            assert!(die.faces().contains(d));
        }
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let die = Die::standard();
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(
            die.sample_rng(50, &mut rng1).unwrap(),
            die.sample_rng(50, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_zero_weight_face_never_drawn() {
        let mut die = Die::new(vec!["H", "T"]).unwrap();
        die.set_weight(&"T", 0.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let draws = die.sample_rng(200, &mut rng).unwrap();
        assert!(draws.iter().all(|d| *d == "H"));
    }

    #[test]
    fn test_all_zero_weights_fail() {
        let mut die = Die::new(vec!["H", "T"]).unwrap();
        die.set_weight(&"H", 0.0).unwrap();
        die.set_weight(&"T", 0.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(die.sample_rng(1, &mut rng), Err(DiceError::ZeroWeightSum));
    }

    #[test]
    fn test_heavy_weight_dominates() {
        // With weight 1000 vs 1, the heavy face should dominate draws.
        let mut die = Die::standard();
        die.set_weight(&6, 1000.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let draws = die.sample_rng(10_000, &mut rng).unwrap();
        let sixes = draws.iter().filter(|&&d| d == 6).count();
        assert!(
            sixes as f64 / 10_000.0 > 0.99,
            "expected >99% sixes, got {sixes}"
        );
    }

    #[test]
    fn test_sample_does_not_mutate() {
        let die = Die::standard();
        let before = die.snapshot();
        die.sample(10).unwrap();
        assert_eq!(die.snapshot(), before);
    }
}
