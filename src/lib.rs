//! # dicesim — Monte Carlo simulation of weighted dice
//!
//! Simulates repeated trials of weighted discrete random events
//! (generalized "dice") and computes descriptive statistics over the
//! recorded results.
//!
//! Three abstractions cooperate, data flowing one direction:
//!
//! | Component | Module | Role |
//! |-----------|--------|------|
//! | [`Die`] | [`die`] | distinct faces with mutable weights; weighted sampling with replacement |
//! | [`Game`] | [`game`] | rolls a set of similar dice over N rounds, keeping only the latest result table |
//! | [`Analyzer`] | [`analyzer`] | jackpot, face-count, combination and permutation statistics over that table |
//!
//! A die's faces can be any `Clone + Ord + Debug` type — numbers, strings,
//! chars. All dice in a game must share the first die's face list.
//!
//! ```
//! use dicesim::{Analyzer, Die, Game};
//!
//! let mut die = Die::standard();
//! die.set_weight(&6, 5.0).unwrap();
//!
//! let mut game = Game::new(vec![die.clone(), die.clone(), die]).unwrap();
//! game.play_seeded(1000, 42).unwrap();
//!
//! let analyzer = Analyzer::new(&game);
//! assert!(analyzer.jackpots().unwrap() <= 1000);
//! ```

pub mod analyzer;
pub mod die;
pub mod error;
pub mod game;
pub mod report;

pub use analyzer::{Analyzer, FaceCounts};
pub use die::{Die, Face};
pub use error::{DiceError, Result};
pub use game::{Game, NarrowEntry, ResultShape, ResultTable};
pub use report::{build_report, save_report, GameReport, GroupCount};
