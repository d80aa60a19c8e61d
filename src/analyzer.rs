//! Descriptive statistics over a game's most recent results.
//!
//! An [`Analyzer`] borrows a [`Game`] and reads its current result table on
//! every call — nothing is cached at construction, so re-playing the game is
//! reflected by analyzers that already exist.
//!
//! Combination and permutation grouping is value-based: two rounds that drew
//! the same faces collapse into one group no matter when they occurred.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::die::Face;
use crate::error::Result;
use crate::game::Game;

/// Per-round face-count table.
///
/// `faces` is the ascending union of every face observed anywhere in the
/// data (not the dice's declared face lists). `rows[round][i]` counts how
/// often `faces[i]` appeared in that round; combinations that never occurred
/// hold 0. Each row sums to the number of dice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaceCounts<T> {
    pub faces: Vec<T>,
    pub rows: Vec<Vec<usize>>,
}

/// Statistics over a single game's most recent play.
pub struct Analyzer<'g, T: Face> {
    game: &'g Game<T>,
}

impl<'g, T: Face> Analyzer<'g, T> {
    pub fn new(game: &'g Game<T>) -> Self {
        Self { game }
    }

    /// Number of rounds in which every die drew the identical face.
    pub fn jackpots(&self) -> Result<usize> {
        let rows = self.game.rows()?;
        Ok(rows
            .iter()
            .filter(|row| row.iter().all(|face| *face == row[0]))
            .count())
    }

    /// Count each observed face per round. See [`FaceCounts`].
    pub fn face_counts(&self) -> Result<FaceCounts<T>> {
        let rows = self.game.rows()?;
        let faces: Vec<T> = rows
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<T>>()
            .into_iter()
            .collect();

        let counts = rows
            .iter()
            .map(|row| {
                let mut counts = vec![0usize; faces.len()];
                for face in row {
                    // face came from the data, so the lookup cannot fail
                    let i = faces.binary_search(face).expect("face in union");
                    counts[i] += 1;
                }
                counts
            })
            .collect();

        Ok(FaceCounts { faces, rows: counts })
    }

    /// Distinct order-independent combinations of faces rolled, with their
    /// occurrence counts. Keys are the sorted multiset of each round's draws;
    /// iteration order is ascending by combination.
    pub fn combo_counts(&self) -> Result<BTreeMap<Vec<T>, usize>> {
        let rows = self.game.rows()?;
        let mut groups = BTreeMap::new();
        for row in rows {
            let mut combo = row.clone();
            combo.sort();
            *groups.entry(combo).or_insert(0) += 1;
        }
        Ok(groups)
    }

    /// Distinct order-sensitive permutations of faces rolled, with their
    /// occurrence counts. Keys are each round's draws in die-position order;
    /// iteration order is ascending by sequence.
    pub fn permu_counts(&self) -> Result<BTreeMap<Vec<T>, usize>> {
        let rows = self.game.rows()?;
        let mut groups = BTreeMap::new();
        for row in rows {
            *groups.entry(row.clone()).or_insert(0) += 1;
        }
        Ok(groups)
    }
}
