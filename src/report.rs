//! Aggregated statistics report and JSON export.
//!
//! Bundles every [`Analyzer`] statistic for one play into a single
//! serializable [`GameReport`], plus a pretty-JSON writer for offline
//! inspection.

use serde::Serialize;

use crate::analyzer::{Analyzer, FaceCounts};
use crate::die::Face;
use crate::error::Result;
use crate::game::Game;

/// One combination or permutation group with its occurrence count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupCount<T> {
    pub faces: Vec<T>,
    pub count: usize,
}

/// Full statistics for a game's most recent play.
#[derive(Clone, Debug, Serialize)]
pub struct GameReport<T> {
    pub rounds: usize,
    pub dice: usize,
    pub jackpots: usize,
    pub jackpot_rate: f64,
    pub face_counts: FaceCounts<T>,
    /// Ascending by combination.
    pub combos: Vec<GroupCount<T>>,
    /// Ascending by sequence.
    pub permutations: Vec<GroupCount<T>>,
}

/// Run every analyzer statistic over the game's most recent play.
pub fn build_report<T: Face + Serialize>(game: &Game<T>) -> Result<GameReport<T>> {
    let analyzer = Analyzer::new(game);
    let rounds = game.rounds_played();
    let jackpots = analyzer.jackpots()?;

    let to_groups = |groups: std::collections::BTreeMap<Vec<T>, usize>| {
        groups
            .into_iter()
            .map(|(faces, count)| GroupCount { faces, count })
            .collect()
    };

    Ok(GameReport {
        rounds,
        dice: game.die_count(),
        jackpots,
        jackpot_rate: jackpots as f64 / rounds as f64,
        face_counts: analyzer.face_counts()?,
        combos: to_groups(analyzer.combo_counts()?),
        permutations: to_groups(analyzer.permu_counts()?),
    })
}

/// Save a report as pretty JSON, creating parent directories as needed.
pub fn save_report<T: Serialize>(report: &GameReport<T>, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize report");
    std::fs::write(path, json).expect("Failed to write report file");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::Die;

    fn played_game() -> Game<&'static str> {
        let coin = Die::new(vec!["H", "T"]).unwrap();
        let mut game = Game::new(vec![coin.clone(), coin.clone(), coin]).unwrap();
        game.play_seeded(40, 42).unwrap();
        game
    }

    #[test]
    fn test_build_report_consistent() {
        let game = played_game();
        let report = build_report(&game).unwrap();

        assert_eq!(report.rounds, 40);
        assert_eq!(report.dice, 3);
        assert!(report.jackpots <= 40);
        assert!((report.jackpot_rate - report.jackpots as f64 / 40.0).abs() < 1e-12);
        assert_eq!(report.combos.iter().map(|g| g.count).sum::<usize>(), 40);
        assert_eq!(
            report.permutations.iter().map(|g| g.count).sum::<usize>(),
            40
        );
    }

    #[test]
    fn test_report_before_play_fails() {
        let coin = Die::new(vec!["H", "T"]).unwrap();
        let game = Game::new(vec![coin]).unwrap();
        assert!(build_report(&game).is_err());
    }

    #[test]
    fn test_save_report_json() {
        let game = played_game();
        let report = build_report(&game).unwrap();
        let path = "/tmp/dicesim_test_report.json";
        save_report(&report, path);

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["rounds"], 40);
        assert_eq!(parsed["dice"], 3);
        assert_eq!(
            parsed["combos"].as_array().unwrap().len(),
            report.combos.len()
        );

        let _ = std::fs::remove_file(path);
    }
}
