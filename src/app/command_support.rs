use crate::backend::SetupApiClient;
use crate::config::{default_state_root_path, load_settings, ConfigError, Settings, StatePaths};
use crate::install::{Navigation, SETUP_STATUS_KEY};
use crate::layout::{current_year, page_chrome, PageChrome, PageKind};
use crate::shared::{DiagnosticLog, FileFlagStore, FlagStore};

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn state_paths() -> Result<StatePaths, String> {
    default_state_root_path()
        .map(StatePaths::new)
        .map_err(map_config_err)
}

/// Collaborators wired from the user's state root and settings.
#[derive(Debug)]
pub struct InstallRuntime {
    pub paths: StatePaths,
    pub settings: Settings,
    pub client: SetupApiClient,
    pub store: FileFlagStore,
    pub log: DiagnosticLog,
}

impl InstallRuntime {
    pub fn install_chrome(&self) -> PageChrome {
        page_chrome(PageKind::Install, &self.settings, current_year())
    }

    pub fn local_flag(&self) -> Result<Option<String>, String> {
        self.store
            .get(SETUP_STATUS_KEY)
            .map_err(|err| err.to_string())
    }

    pub fn navigation_lines(&self, navigation: Navigation) -> Vec<String> {
        vec![
            format!("redirect={}", self.settings.web_url(navigation.route.as_path())),
            format!("navigation={}", navigation.mode.as_str()),
        ]
    }
}

pub fn load_install_runtime() -> Result<InstallRuntime, String> {
    let paths = state_paths()?;
    let settings = load_settings(&paths).map_err(map_config_err)?;
    Ok(InstallRuntime {
        client: SetupApiClient::from_settings(&settings),
        store: FileFlagStore::new(paths.flag_store_path()),
        log: DiagnosticLog::at(paths.diagnostic_log_path()),
        settings,
        paths,
    })
}
