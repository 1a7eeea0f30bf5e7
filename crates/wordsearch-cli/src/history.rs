use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;
use wordsearch_core::{GeneratorConfig, Puzzle};

/// Oldest records are dropped past this many
const MAX_RECORDS: usize = 100;

/// One generated puzzle, with enough to regenerate it via `--seed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub id: u64,
    pub title: String,
    pub seed: Option<u64>,
    pub grid_size: usize,
    pub max_attempts: usize,
    pub requested: usize,
    pub placed: usize,
    /// Unix timestamp of generation
    pub timestamp: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub records: Vec<PuzzleRecord>,
    #[serde(default)]
    next_id: u64,
}

impl History {
    /// Get the save file path
    pub fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordsearch_history.json")
    }

    /// Load history, falling back to empty on a missing or unreadable file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring corrupt history file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save history. Failures are logged and otherwise ignored.
    pub fn save(&self, path: &Path) {
        let result = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "could not save history");
        }
    }

    pub fn record(&mut self, puzzle: &Puzzle, config: &GeneratorConfig) -> &PuzzleRecord {
        self.next_id = self.next_id.max(1);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        self.records.push(PuzzleRecord {
            id: self.next_id,
            title: puzzle.title.clone(),
            seed: puzzle.seed(),
            grid_size: config.grid_size,
            max_attempts: config.max_attempts,
            requested: puzzle.requested(),
            placed: puzzle.placed_count(),
            timestamp,
        });
        self.next_id += 1;

        if self.records.len() > MAX_RECORDS {
            let excess = self.records.len() - MAX_RECORDS;
            self.records.drain(..excess);
        }
        &self.records[self.records.len() - 1]
    }

    /// Newest records first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &PuzzleRecord> {
        self.records.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::GridBuilder;

    fn puzzle(seed: u64) -> Puzzle {
        GridBuilder::with_seed(GeneratorConfig::new(6, 50), seed)
            .generate(&["OAK", "ELM", "WILLOWTREES"])
            .unwrap()
            .with_title("Trees", "")
    }

    #[test]
    fn test_record_and_recent() {
        let mut history = History::default();
        let config = GeneratorConfig::new(6, 50);
        let first = history.record(&puzzle(1), &config).clone();
        history.record(&puzzle(2), &config);

        assert_eq!(first.id, 1);
        assert_eq!(first.title, "Trees");
        assert_eq!(first.seed, Some(1));
        assert_eq!(first.requested, 3);
        assert_eq!(first.placed, 2);

        let ids: Vec<u64> = history.recent(10).map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(history.recent(1).count(), 1);
    }

    #[test]
    fn test_record_cap() {
        let mut history = History::default();
        let config = GeneratorConfig::new(6, 50);
        let puzzle = puzzle(3);
        for _ in 0..MAX_RECORDS + 5 {
            history.record(&puzzle, &config);
        }
        assert_eq!(history.records.len(), MAX_RECORDS);
        assert_eq!(history.records[0].id, 6);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = History::default();
        history.record(&puzzle(4), &GeneratorConfig::new(6, 50));
        history.save(&path);

        let loaded = History::load(&path);
        assert_eq!(loaded.records, history.records);

        let mut loaded = loaded;
        let next = loaded.record(&puzzle(5), &GeneratorConfig::new(6, 50));
        assert_eq!(next.id, 2);
    }

    #[test]
    fn test_load_missing_or_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(History::load(&missing).records.is_empty());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{not json").unwrap();
        assert!(History::load(&corrupt).records.is_empty());
    }
}
