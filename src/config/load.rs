use super::{ConfigError, Settings, StatePaths};

pub const API_BASE_ENV: &str = "SETUPGATE_API_BASE";
pub const WEB_BASE_ENV: &str = "SETUPGATE_WEB_BASE";

pub fn load_settings(paths: &StatePaths) -> Result<Settings, ConfigError> {
    let path = paths.settings_path();
    let mut settings = if path.exists() {
        Settings::from_path(&path)?
    } else {
        Settings::default()
    };
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

fn env_override(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn apply_env_overrides(settings: &mut Settings) {
    if let Some(api_base) = env_override(API_BASE_ENV) {
        settings.api_base = api_base;
    }
    if let Some(web_base) = env_override(WEB_BASE_ENV) {
        settings.web_base = web_base;
    }
}
