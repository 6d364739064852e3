use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// `$HOME/.local/state/typist`, or the platform data dir when HOME is unset
    pub fn state_dir() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("typist")
        } else if let Some(proj_dirs) = ProjectDirs::from("", "", "typist") {
            proj_dirs.data_local_dir().to_path_buf()
        } else {
            PathBuf::from(".")
        }
    }

    pub fn state_path() -> PathBuf {
        Self::state_dir().join("state.json")
    }

    pub fn log_path() -> PathBuf {
        Self::state_dir().join("typist.log")
    }
}
