use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SetupStep {
    NotStarted,
    Finished,
    Other(String),
}

impl From<String> for SetupStep {
    fn from(value: String) -> Self {
        match value.as_str() {
            "not_started" => SetupStep::NotStarted,
            "finished" => SetupStep::Finished,
            _ => SetupStep::Other(value),
        }
    }
}

impl SetupStep {
    pub fn as_str(&self) -> &str {
        match self {
            SetupStep::NotStarted => "not_started",
            SetupStep::Finished => "finished",
            SetupStep::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum InitValidateStatus {
    NotStarted,
    Started,
    Finished,
    Other(String),
}

impl From<String> for InitValidateStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "not_started" => InitValidateStatus::NotStarted,
            "started" => InitValidateStatus::Started,
            "finished" => InitValidateStatus::Finished,
            _ => InitValidateStatus::Other(value),
        }
    }
}

impl InitValidateStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InitValidateStatus::NotStarted => "not_started",
            InitValidateStatus::Started => "started",
            InitValidateStatus::Finished => "finished",
            InitValidateStatus::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetupStatusResponse {
    pub step: SetupStep,
    #[serde(default)]
    pub setup_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InitValidateStatusResponse {
    pub status: InitValidateStatus,
}

/// Body of `POST /setup`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl std::fmt::Debug for SetupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
