use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_API_BASE: &str = "http://localhost:5001/console/api";
pub const DEFAULT_WEB_BASE: &str = "http://localhost:3000";
pub const DEFAULT_LICENSE_URL: &str = "https://docs.dify.ai/user-agreement/open-source";
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "LangGenius, Inc.";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings read from `~/.setupgate/config.yaml`. Every field is optional in
/// the file and falls back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_web_base")]
    pub web_base: String,
    #[serde(default = "default_license_url")]
    pub license_url: String,
    #[serde(default = "default_copyright_holder")]
    pub copyright_holder: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_web_base() -> String {
    DEFAULT_WEB_BASE.to_string()
}

fn default_license_url() -> String {
    DEFAULT_LICENSE_URL.to_string()
}

fn default_copyright_holder() -> String {
    DEFAULT_COPYRIGHT_HOLDER.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            web_base: default_web_base(),
            license_url: default_license_url(),
            copyright_holder: default_copyright_holder(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_base", &self.api_base),
            ("web_base", &self.web_base),
            ("license_url", &self.license_url),
        ] {
            if !is_http_url(value) {
                return Err(ConfigError::Settings(format!(
                    "`{field}` must start with http:// or https://"
                )));
            }
        }
        if self.copyright_holder.trim().is_empty() {
            return Err(ConfigError::Settings(
                "`copyright_holder` must be non-empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Settings(
                "`request_timeout_secs` must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute URL of a web route such as `/signin`.
    pub fn web_url(&self, route: &str) -> String {
        format!("{}{}", self.web_base.trim_end_matches('/'), route)
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}
