use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::state::Difficulty;

const SCORES_FILE_NAME: &str = "high_scores.json";

/// Best (lowest) completed attempt count per difficulty. `0` means unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScoreTable {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl HighScoreTable {
    pub fn best(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn best_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Stores `attempts` if it beats the current best. Returns whether the
    /// table changed.
    pub fn record(&mut self, difficulty: Difficulty, attempts: u32) -> bool {
        let best = self.best_mut(difficulty);
        if *best == 0 || attempts < *best {
            *best = attempts;
            true
        } else {
            false
        }
    }
}

fn scores_path() -> PathBuf {
    glib::user_config_dir()
        .join("number-match")
        .join(SCORES_FILE_NAME)
}

/// Missing or corrupt files silently fall back to the all-zero table.
pub fn load_from(path: &Path) -> HighScoreTable {
    match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            glib::g_message!(
                "number-match",
                "ignoring corrupt score file {}: {err}",
                path.display()
            );
            HighScoreTable::default()
        }),
        Err(_) => HighScoreTable::default(),
    }
}

pub fn save_to(path: &Path, table: &HighScoreTable) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(table).map_err(io::Error::other)?;
    fs::write(path, raw)
}

pub fn load() -> HighScoreTable {
    load_from(&scores_path())
}

pub fn save(table: &HighScoreTable) -> io::Result<()> {
    save_to(&scores_path(), table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("number-match-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn absent_file_loads_zero_defaults() {
        let table = load_from(Path::new("/nonexistent/high_scores.json"));
        assert_eq!(table, HighScoreTable::default());
        assert_eq!(table.easy, 0);
        assert_eq!(table.medium, 0);
        assert_eq!(table.hard, 0);
    }

    #[test]
    fn corrupt_file_loads_zero_defaults() {
        let path = temp_file("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_from(&path), HighScoreTable::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_missing_keys_with_zero() {
        let path = temp_file("partial.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"easy": 6}"#).unwrap();
        let table = load_from(&path);
        assert_eq!(table.easy, 6);
        assert_eq!(table.medium, 0);
        assert_eq!(table.hard, 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn record_is_monotonically_non_increasing() {
        let mut table = HighScoreTable::default();
        assert!(table.record(Difficulty::Easy, 9));
        assert_eq!(table.easy, 9);
        assert!(!table.record(Difficulty::Easy, 9));
        assert!(!table.record(Difficulty::Easy, 12));
        assert_eq!(table.easy, 9);
        assert!(table.record(Difficulty::Easy, 5));
        assert_eq!(table.easy, 5);
    }

    #[test]
    fn sentinel_always_loses_to_a_real_score() {
        let mut table = HighScoreTable::default();
        assert!(table.record(Difficulty::Hard, 40));
        assert_eq!(table.hard, 40);
        assert_eq!(table.easy, 0);
        assert_eq!(table.medium, 0);
    }

    #[test]
    fn save_and_reload_round_trip() {
        let path = temp_file("round_trip.json");
        let table = HighScoreTable {
            easy: 5,
            medium: 11,
            hard: 0,
        };
        save_to(&path, &table).unwrap();
        assert_eq!(load_from(&path), table);
        let _ = fs::remove_file(&path);
    }
}
