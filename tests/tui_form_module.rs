use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use setupgate::backend::{
    BackendError, InitValidateStatusResponse, SetupBackend, SetupRequest, SetupStatusResponse,
};
use setupgate::config::Settings;
use setupgate::install::{AccountField, Navigation, Route, SETUP_STATUS_KEY};
use setupgate::layout::{page_chrome, PageKind};
use setupgate::shared::{DiagnosticLog, FlagStore, MemoryFlagStore};
use setupgate::tui::{
    form_action_from_key, form_transition, parse_scripted_install_keys,
    project_install_view_model, run_install_scripted, FormAction, FormState, InstallContext,
    InstallOutcome,
};
use std::cell::RefCell;

struct ScriptBackend {
    setup_step: &'static str,
    init_status: &'static str,
    setup_fails: bool,
    requests: RefCell<Vec<SetupRequest>>,
}

impl ScriptBackend {
    fn ready() -> Self {
        Self {
            setup_step: "not_started",
            init_status: "started",
            setup_fails: false,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl SetupBackend for ScriptBackend {
    fn fetch_setup_status(&self) -> Result<SetupStatusResponse, BackendError> {
        Ok(SetupStatusResponse {
            step: self.setup_step.to_string().into(),
            setup_at: None,
        })
    }

    fn fetch_init_validate_status(&self) -> Result<InitValidateStatusResponse, BackendError> {
        Ok(InitValidateStatusResponse {
            status: self.init_status.to_string().into(),
        })
    }

    fn setup(&self, request: &SetupRequest) -> Result<(), BackendError> {
        self.requests.borrow_mut().push(request.clone());
        if self.setup_fails {
            return Err(BackendError::Request {
                url: "http://console.test/console/api/setup".to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(())
    }
}

fn run_script(backend: &ScriptBackend, store: &mut MemoryFlagStore, script: &str) -> Result<InstallOutcome, String> {
    let chrome = page_chrome(PageKind::Install, &Settings::default(), 2026);
    let keys = parse_scripted_install_keys(script).expect("parse script");
    run_install_scripted(
        InstallContext {
            backend,
            store,
            chrome: &chrome,
            log: &DiagnosticLog::disabled(),
        },
        keys,
    )
}

#[test]
fn tui_form_module_scripted_install_submits_typed_draft() {
    let backend = ScriptBackend::ready();
    let mut store = MemoryFlagStore::new();

    let outcome = run_script(
        &backend,
        &mut store,
        "text:a@b.com,tab,text:A,tab,text:abcdefg1,enter",
    )
    .expect("scripted install");

    assert_eq!(
        outcome,
        InstallOutcome::Installed(Navigation::client_side(Route::SignIn))
    );
    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "a@b.com");
    assert_eq!(requests[0].name, "A");
    assert_eq!(requests[0].password, "abcdefg1");
}

#[test]
fn tui_form_module_invalid_submit_keeps_form_open() {
    let backend = ScriptBackend::ready();
    let mut store = MemoryFlagStore::new();

    let err = run_script(&backend, &mut store, "text:nope,tab,tab,text:12345678,enter")
        .expect_err("form never submits");

    assert!(err.contains("login.error.emailInValid"), "{err}");
    assert!(err.contains("login.error.nameEmpty"), "{err}");
    assert!(err.contains("login.error.passwordInvalid"), "{err}");
    assert!(backend.requests.borrow().is_empty());
}

#[test]
fn tui_form_module_typing_on_install_button_is_reported_and_ignored() {
    let backend = ScriptBackend::ready();
    let mut store = MemoryFlagStore::new();

    let outcome = run_script(
        &backend,
        &mut store,
        "text:a@b.com,tab,text:A,tab,text:abcdefg1,tab,text:x,enter",
    )
    .expect("stray input does not abort the form");

    assert!(matches!(outcome, InstallOutcome::Installed(_)));
    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].password, "abcdefg1");
}

#[test]
fn tui_form_module_fixing_fields_after_errors_allows_retry() {
    let backend = ScriptBackend::ready();
    let mut store = MemoryFlagStore::new();

    let outcome = run_script(
        &backend,
        &mut store,
        "text:a@b.com,tab,text:A,tab,text:short,enter,text:123,enter",
    )
    .expect("second submit succeeds");

    assert!(matches!(outcome, InstallOutcome::Installed(_)));
    assert_eq!(backend.requests.borrow()[0].password, "short123");
}

#[test]
fn tui_form_module_backend_failure_reports_and_keeps_draft() {
    let backend = ScriptBackend {
        setup_fails: true,
        ..ScriptBackend::ready()
    };
    let mut store = MemoryFlagStore::new();

    let err = run_script(
        &backend,
        &mut store,
        "text:a@b.com,tab,text:A,tab,text:abcdefg1,enter,enter",
    )
    .expect_err("setup keeps failing");

    assert!(err.contains("install.submit_failed"), "{err}");
    assert!(err.contains("connection reset"), "{err}");
    let requests = backend.requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].email, "a@b.com");
}

#[test]
fn tui_form_module_gate_redirect_skips_form() {
    let backend = ScriptBackend {
        setup_step: "finished",
        ..ScriptBackend::ready()
    };
    let mut store = MemoryFlagStore::new();

    let outcome = run_script(&backend, &mut store, "text:ignored,enter").expect("redirect");

    assert_eq!(
        outcome,
        InstallOutcome::Redirected(Navigation::full_reload(Route::SignIn))
    );
    assert_eq!(
        store.get(SETUP_STATUS_KEY).expect("flag").as_deref(),
        Some("finished")
    );
    assert!(backend.requests.borrow().is_empty());
}

#[test]
fn tui_form_module_escape_cancels() {
    let backend = ScriptBackend::ready();
    let mut store = MemoryFlagStore::new();
    let outcome = run_script(&backend, &mut store, "text:a@b.com,esc").expect("cancel");
    assert_eq!(outcome, InstallOutcome::Canceled);
}

#[test]
fn tui_form_module_view_model_masks_password_and_flags_errors() {
    let chrome = page_chrome(PageKind::Install, &Settings::default(), 2026);
    let mut state = FormState::new();
    state.focus = setupgate::tui::FormFocus::Password;
    for ch in "secret".chars() {
        form_transition(&mut state, FormAction::Input(ch)).expect("type");
    }
    state.report = setupgate::install::validate_account_draft(&state.draft);

    let model = project_install_view_model(&state, &chrome);
    assert_eq!(model.rows.len(), 3);
    assert!(model.rows[0].is_placeholder);
    assert_eq!(model.rows[2].value, "••••••");
    assert!(model.rows[2].focused);
    assert_eq!(
        model.rows[2].error.as_deref(),
        Some("Password must be at least 8 characters")
    );
    assert!(model.password_hint_warning);
    assert!(model
        .license_line
        .as_deref()
        .expect("license line")
        .contains("https://docs.dify.ai/user-agreement/open-source"));
    assert_eq!(model.copyright, "© 2026 LangGenius, Inc. All rights reserved.");

    form_transition(&mut state, FormAction::ToggleReveal).expect("reveal");
    let revealed = project_install_view_model(&state, &chrome);
    assert_eq!(revealed.rows[2].value, "secret");
    assert_eq!(state.draft.value(AccountField::Password), "secret");
}

#[test]
fn tui_form_module_maps_keys_to_actions() {
    let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
    assert_eq!(form_action_from_key(key(KeyCode::Tab)), Some(FormAction::FocusNext));
    assert_eq!(form_action_from_key(key(KeyCode::Up)), Some(FormAction::FocusPrev));
    assert_eq!(form_action_from_key(key(KeyCode::Enter)), Some(FormAction::Submit));
    assert_eq!(form_action_from_key(key(KeyCode::Esc)), Some(FormAction::Cancel));
    assert_eq!(
        form_action_from_key(key(KeyCode::Char('q'))),
        Some(FormAction::Input('q'))
    );
    assert!(parse_scripted_install_keys("enter,jump").is_err());
}
