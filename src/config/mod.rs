pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::{apply_env_overrides, load_settings, API_BASE_ENV, WEB_BASE_ENV};
pub use paths::{
    default_state_root_path, StatePaths, DIAGNOSTIC_LOG_FILE, FLAG_STORE_FILE_NAME,
    GLOBAL_SETTINGS_FILE_NAME, GLOBAL_STATE_DIR,
};
pub use settings::{
    Settings, DEFAULT_API_BASE, DEFAULT_COPYRIGHT_HOLDER, DEFAULT_LICENSE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_WEB_BASE,
};
