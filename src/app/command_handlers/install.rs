use crate::app::command_support::{load_install_runtime, InstallRuntime};
use crate::backend::SetupBackend;
use crate::install::{AccountDraft, GatePhase, StatusGate, SubmissionHandler, SubmitError};
use crate::shared::{DiagnosticLog, FlagStore};
use crate::tui::{
    is_interactive_terminal, load_scripted_install_keys, run_install_scripted, run_install_tui,
    InstallContext, InstallOutcome,
};

#[derive(Debug, Default)]
struct InstallFlags {
    email: Option<String>,
    name: Option<String>,
    password: Option<String>,
}

fn parse_install_flags(args: &[String]) -> Result<Option<AccountDraft>, String> {
    let mut flags = InstallFlags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let slot = match arg.as_str() {
            "--email" => &mut flags.email,
            "--name" => &mut flags.name,
            "--password" => &mut flags.password,
            other => {
                return Err(format!(
                    "unknown install argument `{other}`; usage: install [--email E --name N --password P]"
                ))
            }
        };
        let value = iter
            .next()
            .ok_or_else(|| format!("install argument `{arg}` requires a value"))?;
        *slot = Some(value.clone());
    }

    match flags {
        InstallFlags {
            email: None,
            name: None,
            password: None,
        } => Ok(None),
        InstallFlags {
            email: Some(email),
            name: Some(name),
            password: Some(password),
        } => Ok(Some(AccountDraft {
            email,
            name,
            password,
        })),
        _ => Err("install requires --email, --name and --password together".to_string()),
    }
}

fn run_gate<B, S>(backend: &B, store: &mut S, log: &DiagnosticLog) -> Option<InstallOutcome>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    let mut gate = StatusGate::new();
    gate.run(backend, store, log);
    match gate.phase() {
        GatePhase::Redirecting(navigation) => Some(InstallOutcome::Redirected(navigation)),
        GatePhase::Checking | GatePhase::Ready => None,
    }
}

fn run_install_headless<B, S>(
    ctx: InstallContext<'_, B, S>,
    draft: AccountDraft,
) -> Result<InstallOutcome, String>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    if let Some(outcome) = run_gate(ctx.backend, ctx.store, ctx.log) {
        return Ok(outcome);
    }
    let mut handler = SubmissionHandler::new();
    match handler.submit(ctx.backend, &draft, ctx.log) {
        Ok(navigation) => Ok(InstallOutcome::Installed(navigation)),
        Err(SubmitError::Invalid(report)) => Err(format!("install validation failed: {report}")),
        Err(err) => Err(format!("install.submit_failed: {err}")),
    }
}

fn run_install_without_input<B, S>(ctx: InstallContext<'_, B, S>) -> Result<InstallOutcome, String>
where
    B: SetupBackend + ?Sized,
    S: FlagStore + ?Sized,
{
    if let Some(outcome) = run_gate(ctx.backend, ctx.store, ctx.log) {
        return Ok(outcome);
    }
    Err(format!(
        "install form needs input: run in an interactive terminal, set {}, or pass --email/--name/--password",
        crate::tui::SCRIPT_KEYS_ENV
    ))
}

fn render_outcome(runtime: &InstallRuntime, outcome: InstallOutcome) -> String {
    let (headline, navigation) = match outcome {
        InstallOutcome::Canceled => return "install canceled".to_string(),
        InstallOutcome::Redirected(navigation) => ("install skipped", navigation),
        InstallOutcome::Installed(navigation) => ("install complete", navigation),
    };
    let mut lines = vec![headline.to_string()];
    lines.extend(runtime.navigation_lines(navigation));
    lines.join("\n")
}

pub fn cmd_install(args: &[String]) -> Result<String, String> {
    let draft = parse_install_flags(args)?;
    let mut runtime = load_install_runtime()?;
    let chrome = runtime.install_chrome();
    let ctx = InstallContext {
        backend: &runtime.client,
        store: &mut runtime.store,
        chrome: &chrome,
        log: &runtime.log,
    };

    let outcome = if let Some(draft) = draft {
        run_install_headless(ctx, draft)?
    } else if let Some(keys) = load_scripted_install_keys()? {
        run_install_scripted(ctx, keys)?
    } else if is_interactive_terminal() {
        run_install_tui(ctx)?
    } else {
        run_install_without_input(ctx)?
    };
    Ok(render_outcome(&runtime, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn install_flags_require_all_three_values() {
        assert_eq!(parse_install_flags(&[]).expect("no flags"), None);
        let draft = parse_install_flags(&args(&[
            "--email", "a@b.com", "--name", "A", "--password", "abcdefg1",
        ]))
        .expect("all flags")
        .expect("draft");
        assert_eq!(draft, AccountDraft::new("a@b.com", "A", "abcdefg1"));

        let err = parse_install_flags(&args(&["--email", "a@b.com"])).expect_err("partial");
        assert!(err.contains("together"), "{err}");
        let err = parse_install_flags(&args(&["--name"])).expect_err("missing value");
        assert!(err.contains("requires a value"), "{err}");
        let err = parse_install_flags(&args(&["--force"])).expect_err("unknown flag");
        assert!(err.contains("unknown install argument"), "{err}");
    }
}
