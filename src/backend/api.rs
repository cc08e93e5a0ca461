use super::{
    BackendError, InitValidateStatusResponse, SetupBackend, SetupRequest, SetupStatusResponse,
};
use crate::config::Settings;
use serde::Deserialize;
use std::time::Duration;

const SETUP_PATH: &str = "setup";
const INIT_VALIDATE_PATH: &str = "init";

/// Blocking client for the console setup API.
#[derive(Clone)]
pub struct SetupApiClient {
    api_base: String,
    agent: ureq::Agent,
}

impl std::fmt::Debug for SetupApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupApiClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl SetupApiClient {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("setupgate/", env!("CARGO_PKG_VERSION")))
            .build();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.api_base,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path)
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.endpoint(path);
        let response = self
            .agent
            .get(&url)
            .set("accept", "application/json")
            .call()
            .map_err(|err| map_ureq_err(&url, err))?;

        response
            .into_json::<T>()
            .map_err(|e| BackendError::Decode {
                url,
                message: e.to_string(),
            })
    }
}

fn map_ureq_err(url: &str, err: ureq::Error) -> BackendError {
    match err {
        ureq::Error::Status(status, _) => BackendError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => BackendError::Request {
            url: url.to_string(),
            message: transport.to_string(),
        },
    }
}

impl SetupBackend for SetupApiClient {
    fn fetch_setup_status(&self) -> Result<SetupStatusResponse, BackendError> {
        self.get_json(SETUP_PATH)
    }

    fn fetch_init_validate_status(&self) -> Result<InitValidateStatusResponse, BackendError> {
        self.get_json(INIT_VALIDATE_PATH)
    }

    fn setup(&self, request: &SetupRequest) -> Result<(), BackendError> {
        let url = self.endpoint(SETUP_PATH);
        let body = serde_json::to_value(request).map_err(|e| BackendError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;
        self.agent
            .post(&url)
            .set("accept", "application/json")
            .send_json(body)
            .map_err(|err| map_ureq_err(&url, err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trims_trailing_slash_from_base() {
        let client =
            SetupApiClient::new("http://127.0.0.1:5001/console/api/", Duration::from_secs(1));
        assert_eq!(client.api_base(), "http://127.0.0.1:5001/console/api");
        assert_eq!(
            client.endpoint(SETUP_PATH),
            "http://127.0.0.1:5001/console/api/setup"
        );
        assert_eq!(
            client.endpoint(INIT_VALIDATE_PATH),
            "http://127.0.0.1:5001/console/api/init"
        );
    }
}
