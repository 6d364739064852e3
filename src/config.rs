use std::path::PathBuf;

use crate::app_dirs::AppDirs;
use crate::difficulty::Difficulty;
use crate::error::StoreError;
use crate::storage::KeyValueStore;

pub const DIFFICULTY_KEY: &str = "difficulty";

/// Where persisted state and logs live.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub state_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: AppDirs::state_path(),
            log_file: AppDirs::log_path(),
        }
    }
}

impl Config {
    pub fn with_overrides(state_file: Option<PathBuf>, log_file: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            state_file: state_file.unwrap_or(defaults.state_file),
            log_file: log_file.unwrap_or(defaults.log_file),
        }
    }
}

/// Last selected difficulty; absent or unknown values give the default tier.
pub fn load_difficulty<S: KeyValueStore>(store: &S) -> Difficulty {
    store
        .get(DIFFICULTY_KEY)
        .map(|name| Difficulty::from_name_or_default(&name))
        .unwrap_or_default()
}

pub fn save_difficulty<S: KeyValueStore>(
    store: &mut S,
    difficulty: Difficulty,
) -> Result<(), StoreError> {
    store.set(DIFFICULTY_KEY, &difficulty.to_string())
}

/// A difficulty passed on the command line wins over the persisted one.
pub fn resolve_difficulty<S: KeyValueStore>(
    store: &S,
    requested: Option<Difficulty>,
) -> Difficulty {
    requested.unwrap_or_else(|| load_difficulty(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn test_load_difficulty_defaults_to_medium() {
        let store = MemoryStore::new();

        assert_eq!(load_difficulty(&store), Difficulty::Medium);
    }

    #[test]
    fn test_load_difficulty_unknown_value() {
        let mut store = MemoryStore::new();
        store.set(DIFFICULTY_KEY, "insane").unwrap();

        assert_eq!(load_difficulty(&store), Difficulty::Medium);
    }

    #[test]
    fn test_save_and_load_difficulty_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = FileStore::open(&path);

        save_difficulty(&mut store, Difficulty::Easy).unwrap();

        assert_eq!(load_difficulty(&FileStore::open(&path)), Difficulty::Easy);
    }

    #[test]
    fn test_requested_difficulty_wins() {
        let mut store = MemoryStore::new();
        save_difficulty(&mut store, Difficulty::Easy).unwrap();

        assert_eq!(
            resolve_difficulty(&store, Some(Difficulty::Hard)),
            Difficulty::Hard
        );
        assert_eq!(resolve_difficulty(&store, None), Difficulty::Easy);
    }

    #[test]
    fn test_config_overrides() {
        let cfg = Config::with_overrides(Some(PathBuf::from("/tmp/s.json")), None);

        assert_eq!(cfg.state_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(cfg.log_file, AppDirs::log_path());
    }
}
