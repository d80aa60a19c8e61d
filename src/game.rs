//! Trial runner: plays a batch of rounds across a set of similar dice.
//!
//! A [`Game`] owns an ordered list of dice that all share the first die's
//! face list. Each [`Game::play`] rolls every die once per round and stores
//! the full rounds × dice result table, wholly replacing the previous one —
//! only the most recent play is retrievable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::die::{Die, Face};
use crate::error::{DiceError, Result};

/// Which shape [`Game::results`] returns the result table in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultShape {
    /// One row per round, one column per die.
    Wide,
    /// One entry per (round, die) pair, ordered by round then die position.
    Narrow,
}

/// One cell of the narrow result view. `round` and `die` are 1-based.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NarrowEntry<T> {
    pub round: usize,
    pub die: usize,
    pub face: T,
}

/// Result table in the shape requested from [`Game::results`].
#[derive(Clone, Debug, PartialEq)]
pub enum ResultTable<T> {
    /// `rows[round][die]`, 0-indexed.
    Wide(Vec<Vec<T>>),
    Narrow(Vec<NarrowEntry<T>>),
}

/// A set of similar dice plus the result table of the most recent play.
#[derive(Debug)]
pub struct Game<T: Face> {
    dice: Vec<Die<T>>,
    /// rounds × dice, present only after the first play.
    table: Option<Vec<Vec<T>>>,
}

impl<T: Face> Game<T> {
    /// Build a game from an ordered dice list.
    ///
    /// Fails with [`DiceError::NoDice`] on an empty list and with
    /// [`DiceError::MismatchedFaces`] if any die's face list differs
    /// (order-sensitive) from the first die's.
    pub fn new(dice: Vec<Die<T>>) -> Result<Self> {
        let first = dice.first().ok_or(DiceError::NoDice)?;
        for (i, die) in dice.iter().enumerate().skip(1) {
            if die.faces() != first.faces() {
                return Err(DiceError::MismatchedFaces { position: i + 1 });
            }
        }
        Ok(Self { dice, table: None })
    }

    /// The dice, in position order.
    pub fn dice(&self) -> &[Die<T>] {
        &self.dice
    }

    /// Number of dice in the game.
    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    /// Rounds recorded by the most recent play (0 before any play).
    pub fn rounds_played(&self) -> usize {
        self.table.as_ref().map_or(0, Vec::len)
    }

    /// Play `rounds` rounds with a fresh OS-seeded RNG.
    pub fn play(&mut self, rounds: usize) -> Result<()> {
        let mut rng = SmallRng::from_os_rng();
        self.play_rng(rounds, &mut rng)
    }

    /// Play `rounds` rounds deterministically from a seed.
    pub fn play_seeded(&mut self, rounds: usize, seed: u64) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.play_rng(rounds, &mut rng)
    }

    /// Play `rounds` rounds with the given RNG. Each die draws once per
    /// round from its own weight distribution, independently of the others.
    /// The stored table is replaced only after every draw succeeds, so a
    /// failed play leaves the previous results intact.
    pub fn play_rng<R: Rng>(&mut self, rounds: usize, rng: &mut R) -> Result<()> {
        if rounds == 0 {
            return Err(DiceError::InvalidRounds);
        }
        // One column per die, matching per-die draw order, then transpose.
        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.sample_rng(rounds, rng)?);
        }
        let table = (0..rounds)
            .map(|r| columns.iter().map(|col| col[r].clone()).collect())
            .collect();
        self.table = Some(table);
        Ok(())
    }

    /// The most recent play's results, copied into the requested shape.
    ///
    /// Fails with [`DiceError::NotPlayed`] before the first play.
    pub fn results(&self, shape: ResultShape) -> Result<ResultTable<T>> {
        let rows = self.rows()?;
        Ok(match shape {
            ResultShape::Wide => ResultTable::Wide(rows.to_vec()),
            ResultShape::Narrow => {
                let entries = rows
                    .iter()
                    .enumerate()
                    .flat_map(|(r, row)| {
                        row.iter().enumerate().map(move |(d, face)| NarrowEntry {
                            round: r + 1,
                            die: d + 1,
                            face: face.clone(),
                        })
                    })
                    .collect();
                ResultTable::Narrow(entries)
            }
        })
    }

    /// Borrow the stored wide table.
    pub(crate) fn rows(&self) -> Result<&[Vec<T>]> {
        self.table.as_deref().ok_or(DiceError::NotPlayed)
    }
}
