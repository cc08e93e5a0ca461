use super::navigation::{form_action_from_key, parse_scripted_install_keys, FormEffect};
use super::screens::{draw_install_ui, draw_message_ui, project_install_view_model};
use super::state::{form_transition, FormState};
use crate::backend::SetupBackend;
use crate::install::messages::text;
use crate::install::{GatePhase, Navigation, StatusGate, SubmissionHandler, SubmitError};
use crate::layout::PageChrome;
use crate::shared::{DiagnosticLog, FlagStore};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::time::Duration;

pub const SCRIPT_KEYS_ENV: &str = "SETUPGATE_INSTALL_SCRIPT_KEYS";

type SetupTerminal = Terminal<CrosstermBackend<io::Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Redirected(Navigation),
    Installed(Navigation),
    Canceled,
}

/// Collaborators shared by every way of driving the install page.
pub struct InstallContext<'a, B: ?Sized, S: ?Sized> {
    pub backend: &'a B,
    pub store: &'a mut S,
    pub chrome: &'a PageChrome,
    pub log: &'a DiagnosticLog,
}

pub fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub fn load_scripted_install_keys() -> Result<Option<Vec<KeyEvent>>, String> {
    let Ok(raw) = std::env::var(SCRIPT_KEYS_ENV) else {
        return Ok(None);
    };
    parse_scripted_install_keys(&raw).map(Some)
}

fn gate_redirect(gate: &StatusGate) -> Option<InstallOutcome> {
    match gate.phase() {
        GatePhase::Redirecting(navigation) => Some(InstallOutcome::Redirected(navigation)),
        GatePhase::Checking | GatePhase::Ready => None,
    }
}

/// Applies a form effect. `on_pending` runs after the draft is accepted and
/// before the setup request is sent.
pub(crate) fn apply_form_effect<B, F>(
    state: &mut FormState,
    handler: &mut SubmissionHandler,
    backend: &B,
    log: &DiagnosticLog,
    effect: FormEffect,
    mut on_pending: F,
) -> Result<Option<InstallOutcome>, String>
where
    B: SetupBackend + ?Sized,
    F: FnMut(&FormState) -> Result<(), String>,
{
    match effect {
        FormEffect::None => Ok(None),
        FormEffect::Cancel => Ok(Some(InstallOutcome::Canceled)),
        FormEffect::Submit => {
            let prepared = match handler.prepare(&state.draft) {
                Ok(prepared) => prepared,
                Err(SubmitError::Invalid(report)) => {
                    state.report = report;
                    state.status_text = "Fix the highlighted fields and try again.".to_string();
                    return Ok(None);
                }
                Err(err) => {
                    state.status_text = err.to_string();
                    return Ok(None);
                }
            };
            state.report = Default::default();
            state.status_text = text("login.submitting").to_string();
            on_pending(state)?;
            match handler.complete(backend, prepared, log) {
                Ok(navigation) => {
                    state.discard_draft();
                    Ok(Some(InstallOutcome::Installed(navigation)))
                }
                Err(err) => {
                    state.status_text = format!("install.submit_failed: {err}");
                    Ok(None)
                }
            }
        }
    }
}

pub fn run_install_scripted<B, S>(
    ctx: InstallContext<'_, B, S>,
    keys: Vec<KeyEvent>,
) -> Result<InstallOutcome, String>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    let mut gate = StatusGate::new();
    gate.run(ctx.backend, ctx.store, ctx.log);
    if let Some(outcome) = gate_redirect(&gate) {
        return Ok(outcome);
    }

    let mut state = FormState::new();
    let mut handler = SubmissionHandler::new();
    for key in keys {
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        let transition = match form_transition(&mut state, action) {
            Ok(transition) => transition,
            Err(err) => {
                state.status_text = err.to_string();
                continue;
            }
        };
        if let Some(feedback) = transition.feedback {
            state.status_text = feedback;
        }
        if let Some(outcome) = apply_form_effect(
            &mut state,
            &mut handler,
            ctx.backend,
            ctx.log,
            transition.effect,
            |_| Ok(()),
        )? {
            return Ok(outcome);
        }
    }
    if !state.report.is_valid() {
        return Err(format!(
            "scripted install did not terminate; last status: {}; errors: {}",
            state.status_text, state.report
        ));
    }
    Err(format!(
        "scripted install did not terminate; last status: {}; include enter or esc",
        state.status_text
    ))
}

pub fn run_install_tui<B, S>(ctx: InstallContext<'_, B, S>) -> Result<InstallOutcome, String>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter install screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create install terminal: {e}"))?;
    let result = run_install_tui_loop(ctx, &mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave install screen: {e}"))?;
    result
}

fn draw_form(
    terminal: &mut SetupTerminal,
    state: &FormState,
    chrome: &PageChrome,
) -> Result<(), String> {
    let view_model = project_install_view_model(state, chrome);
    terminal
        .draw(|frame| draw_install_ui(frame, &view_model))
        .map_err(|e| format!("failed to render install form: {e}"))?;
    Ok(())
}

fn run_install_tui_loop<B, S>(
    ctx: InstallContext<'_, B, S>,
    terminal: &mut SetupTerminal,
) -> Result<InstallOutcome, String>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    terminal
        .draw(|frame| draw_message_ui(frame, ctx.chrome, text("login.loading")))
        .map_err(|e| format!("failed to render loading screen: {e}"))?;
    let mut gate = StatusGate::new();
    gate.run(ctx.backend, ctx.store, ctx.log);
    if let Some(outcome) = gate_redirect(&gate) {
        return Ok(outcome);
    }

    let mut state = FormState::new();
    let mut handler = SubmissionHandler::new();
    loop {
        draw_form(terminal, &state, ctx.chrome)?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll install input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read install input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        let transition = match form_transition(&mut state, action) {
            Ok(transition) => transition,
            Err(err) => {
                state.status_text = err.to_string();
                continue;
            }
        };
        if let Some(feedback) = transition.feedback {
            state.status_text = feedback;
        }
        let chrome = ctx.chrome;
        if let Some(outcome) = apply_form_effect(
            &mut state,
            &mut handler,
            ctx.backend,
            ctx.log,
            transition.effect,
            |pending| draw_form(terminal, pending, chrome),
        )? {
            return Ok(outcome);
        }
    }
}
