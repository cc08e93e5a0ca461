use crate::config::ConfigError;
use std::path::PathBuf;

pub const GLOBAL_STATE_DIR: &str = ".setupgate";
pub const GLOBAL_SETTINGS_FILE_NAME: &str = "config.yaml";
pub const FLAG_STORE_FILE_NAME: &str = "local_storage.json";
pub const DIAGNOSTIC_LOG_FILE: &str = "logs/setupgate.log";

pub fn default_state_root_path() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(GLOBAL_STATE_DIR))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub root: PathBuf,
}

impl StatePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(GLOBAL_SETTINGS_FILE_NAME)
    }

    pub fn flag_store_path(&self) -> PathBuf {
        self.root.join(FLAG_STORE_FILE_NAME)
    }

    pub fn diagnostic_log_path(&self) -> PathBuf {
        self.root.join(DIAGNOSTIC_LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_paths_place_files_under_root() {
        let paths = StatePaths::new("/tmp/state");
        assert_eq!(
            paths.settings_path(),
            PathBuf::from("/tmp/state/config.yaml")
        );
        assert_eq!(
            paths.flag_store_path(),
            PathBuf::from("/tmp/state/local_storage.json")
        );
        assert_eq!(
            paths.diagnostic_log_path(),
            PathBuf::from("/tmp/state/logs/setupgate.log")
        );
    }
}
