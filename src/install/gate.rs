//! Decides once per run whether the install form is shown or the user is
//! sent elsewhere.
//!
//! The gate starts in [`GatePhase::Checking`] and leaves it exactly once.
//! Setup status is always fetched first; init-validate status is fetched only
//! when setup is not finished. Any backend failure along that chain opens the
//! form.

use super::navigation::{Navigation, Route};
use crate::backend::{BackendError, InitValidateStatus, SetupBackend, SetupStep};
use crate::shared::{DiagnosticLog, FlagStore};

pub const SETUP_STATUS_KEY: &str = "setup_status";
pub const SETUP_FINISHED_VALUE: &str = "finished";

pub const GATE_STATUS_CHECK_FAILED_EVENT: &str = "install.gate.status_check_failed";
pub const GATE_FLAG_WRITE_FAILED_EVENT: &str = "install.gate.flag_write_failed";
pub const GATE_REDIRECT_EVENT: &str = "install.gate.redirect";
pub const GATE_READY_EVENT: &str = "install.gate.ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Checking,
    Redirecting(Navigation),
    Ready,
}

impl GatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatePhase::Checking => "checking",
            GatePhase::Redirecting(_) => "redirecting",
            GatePhase::Ready => "ready",
        }
    }
}

/// What one gate run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub phase: GatePhase,
    pub setup_step: Option<SetupStep>,
    pub setup_at: Option<String>,
    pub init_status: Option<InitValidateStatus>,
    pub failure: Option<String>,
}

impl GateReport {
    fn new(phase: GatePhase) -> Self {
        Self {
            phase,
            setup_step: None,
            setup_at: None,
            init_status: None,
            failure: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGate {
    phase: GatePhase,
}

impl Default for StatusGate {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusGate {
    pub fn new() -> Self {
        Self {
            phase: GatePhase::Checking,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GatePhase::Checking
    }

    pub fn form_visible(&self) -> bool {
        self.phase == GatePhase::Ready
    }

    /// Runs the status checks. A gate that already settled does not fetch
    /// again and reports its settled phase.
    pub fn run<B, S>(&mut self, backend: &B, store: &mut S, log: &DiagnosticLog) -> GateReport
    where
        B: SetupBackend + ?Sized,
        S: FlagStore + ?Sized,
    {
        if !self.is_loading() {
            return GateReport::new(self.phase);
        }

        let mut report = GateReport::new(GatePhase::Checking);
        let next = match check_statuses(backend, store, log, &mut report) {
            Ok(phase) => phase,
            Err(err) => {
                log.error(GATE_STATUS_CHECK_FAILED_EVENT, &err.to_string());
                report.failure = Some(err.to_string());
                GatePhase::Ready
            }
        };

        match next {
            GatePhase::Redirecting(navigation) => {
                log.info(GATE_REDIRECT_EVENT, navigation.route.as_path());
            }
            GatePhase::Ready => log.info(GATE_READY_EVENT, "install form opened"),
            GatePhase::Checking => {}
        }
        self.phase = next;
        report.phase = next;
        report
    }
}

fn check_statuses<B, S>(
    backend: &B,
    store: &mut S,
    log: &DiagnosticLog,
    report: &mut GateReport,
) -> Result<GatePhase, BackendError>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    let setup = backend.fetch_setup_status()?;
    report.setup_step = Some(setup.step.clone());
    report.setup_at = setup.setup_at;
    if setup.step == SetupStep::Finished {
        if let Err(err) = store.set(SETUP_STATUS_KEY, SETUP_FINISHED_VALUE) {
            log.error(GATE_FLAG_WRITE_FAILED_EVENT, &err.to_string());
        }
        return Ok(GatePhase::Redirecting(Navigation::full_reload(
            Route::SignIn,
        )));
    }

    let init = backend.fetch_init_validate_status()?;
    report.init_status = Some(init.status.clone());
    if init.status == InitValidateStatus::NotStarted {
        return Ok(GatePhase::Redirecting(Navigation::full_reload(Route::Init)));
    }
    Ok(GatePhase::Ready)
}
