pub mod api;
pub mod error;
pub mod types;

pub use api::SetupApiClient;
pub use error::BackendError;
pub use types::{
    InitValidateStatus, InitValidateStatusResponse, SetupRequest, SetupStatusResponse, SetupStep,
};

/// The three console endpoints the install flow consumes.
pub trait SetupBackend {
    fn fetch_setup_status(&self) -> Result<SetupStatusResponse, BackendError>;
    fn fetch_init_validate_status(&self) -> Result<InitValidateStatusResponse, BackendError>;
    fn setup(&self, request: &SetupRequest) -> Result<(), BackendError>;
}
