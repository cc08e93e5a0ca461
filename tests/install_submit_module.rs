use setupgate::backend::{
    BackendError, InitValidateStatusResponse, SetupBackend, SetupRequest, SetupStatusResponse,
};
use setupgate::install::{
    AccountDraft, AccountField, Navigation, NavigationMode, Route, SubmissionHandler,
    SubmitError, ValidationCode,
};
use setupgate::shared::DiagnosticLog;
use std::cell::RefCell;
use std::fs;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingBackend {
    fail_with_status: Option<u16>,
    requests: RefCell<Vec<SetupRequest>>,
}

impl SetupBackend for RecordingBackend {
    fn fetch_setup_status(&self) -> Result<SetupStatusResponse, BackendError> {
        panic!("submission must not query setup status");
    }

    fn fetch_init_validate_status(&self) -> Result<InitValidateStatusResponse, BackendError> {
        panic!("submission must not query init status");
    }

    fn setup(&self, request: &SetupRequest) -> Result<(), BackendError> {
        self.requests.borrow_mut().push(request.clone());
        match self.fail_with_status {
            Some(status) => Err(BackendError::Status {
                url: "http://console.test/console/api/setup".to_string(),
                status,
            }),
            None => Ok(()),
        }
    }
}

#[test]
fn install_submit_module_valid_draft_sends_one_request_then_signin() {
    let backend = RecordingBackend::default();
    let mut handler = SubmissionHandler::new();
    let draft = AccountDraft::new("a@b.com", "A", "abcdefg1");

    let navigation = handler
        .submit(&backend, &draft, &DiagnosticLog::disabled())
        .expect("submit succeeds");

    assert_eq!(navigation, Navigation::client_side(Route::SignIn));
    assert_eq!(navigation.mode, NavigationMode::ClientSide);
    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        serde_json::to_value(&requests[0]).expect("encode"),
        serde_json::json!({"email": "a@b.com", "name": "A", "password": "abcdefg1"})
    );
    assert!(!handler.is_pending());
}

#[test]
fn install_submit_module_invalid_draft_sends_nothing() {
    let backend = RecordingBackend::default();
    let mut handler = SubmissionHandler::new();
    let draft = AccountDraft::new("not-an-email", "A", "1234567");

    let err = handler
        .submit(&backend, &draft, &DiagnosticLog::disabled())
        .expect_err("invalid draft");

    match err {
        SubmitError::Invalid(report) => {
            assert_eq!(
                report.get(AccountField::Email),
                Some(ValidationCode::EmailInvalid)
            );
            assert_eq!(
                report.get(AccountField::Password),
                Some(ValidationCode::PasswordLengthInvalid)
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(backend.requests.borrow().is_empty());
    assert!(!handler.is_pending());
}

#[test]
fn install_submit_module_second_submit_while_pending_is_rejected() {
    let backend = RecordingBackend::default();
    let mut handler = SubmissionHandler::new();
    let draft = AccountDraft::new("a@b.com", "A", "abcdefg1");

    let prepared = handler.prepare(&draft).expect("first prepare");
    assert!(handler.is_pending());
    let err = handler
        .submit(&backend, &draft, &DiagnosticLog::disabled())
        .expect_err("double submit");
    assert!(matches!(err, SubmitError::AlreadyPending), "{err:?}");
    assert!(backend.requests.borrow().is_empty());

    handler
        .complete(&backend, prepared, &DiagnosticLog::disabled())
        .expect("first submit completes");
    assert_eq!(backend.requests.borrow().len(), 1);
    assert!(!handler.is_pending());
}

#[test]
fn install_submit_module_backend_failure_releases_slot_and_reports() {
    let backend = RecordingBackend {
        fail_with_status: Some(500),
        ..RecordingBackend::default()
    };
    let mut handler = SubmissionHandler::new();
    let draft = AccountDraft::new("a@b.com", "A", "abcdefg1");

    let err = handler
        .submit(&backend, &draft, &DiagnosticLog::disabled())
        .expect_err("backend failure");
    assert!(err.to_string().contains("status code 500"), "{err}");
    assert!(!handler.is_pending());

    handler
        .submit(&backend, &draft, &DiagnosticLog::disabled())
        .expect_err("retry hits the same failure");
    assert_eq!(backend.requests.borrow().len(), 2);
}

#[test]
fn install_submit_module_success_log_omits_account_details() {
    let temp = tempdir().expect("tempdir");
    let log = DiagnosticLog::at(temp.path().join("logs/setupgate.log"));
    let backend = RecordingBackend::default();
    let mut handler = SubmissionHandler::new();
    let draft = AccountDraft::new("admin@example.com", "Admin", "abcdefg1");

    handler
        .submit(&backend, &draft, &log)
        .expect("submit succeeds");

    let raw = fs::read_to_string(log.path().expect("log path")).expect("read log");
    assert!(raw.contains("install.submit.completed"), "{raw}");
    assert!(raw.contains("admin account created"), "{raw}");
    assert!(!raw.contains("admin@example.com"), "{raw}");
    assert!(!raw.contains("abcdefg1"), "{raw}");
}
