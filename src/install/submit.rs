use super::draft::AccountDraft;
use super::navigation::{Navigation, Route};
use super::validate::{validate_account_draft, ValidationReport};
use crate::backend::{BackendError, SetupBackend, SetupRequest};
use crate::shared::DiagnosticLog;

pub const SUBMIT_COMPLETED_EVENT: &str = "install.submit.completed";
pub const SUBMIT_FAILED_EVENT: &str = "install.submit_failed";

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Invalid(ValidationReport),
    #[error("a setup request is already pending")]
    AlreadyPending,
    #[error("setup request failed: {0}")]
    Backend(#[from] BackendError),
}

/// A validated draft that holds the submit slot until completed.
#[derive(Debug)]
pub struct PreparedSubmit {
    request: SetupRequest,
}

/// Sends the draft to the setup endpoint, one request at a time.
#[derive(Debug, Default)]
pub struct SubmissionHandler {
    pending: bool,
}

impl SubmissionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn prepare(&mut self, draft: &AccountDraft) -> Result<PreparedSubmit, SubmitError> {
        if self.pending {
            return Err(SubmitError::AlreadyPending);
        }
        let report = validate_account_draft(draft);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }
        self.pending = true;
        Ok(PreparedSubmit {
            request: draft.to_setup_request(),
        })
    }

    pub fn complete<B>(
        &mut self,
        backend: &B,
        prepared: PreparedSubmit,
        log: &DiagnosticLog,
    ) -> Result<Navigation, SubmitError>
    where
        B: SetupBackend + ?Sized,
    {
        let result = backend.setup(&prepared.request);
        self.pending = false;
        match result {
            Ok(()) => {
                log.info(SUBMIT_COMPLETED_EVENT, "admin account created");
                Ok(Navigation::client_side(Route::SignIn))
            }
            Err(err) => {
                log.error(SUBMIT_FAILED_EVENT, &err.to_string());
                Err(SubmitError::Backend(err))
            }
        }
    }

    pub fn submit<B>(
        &mut self,
        backend: &B,
        draft: &AccountDraft,
        log: &DiagnosticLog,
    ) -> Result<Navigation, SubmitError>
    where
        B: SetupBackend + ?Sized,
    {
        let prepared = self.prepare(draft)?;
        self.complete(backend, prepared, log)
    }
}
