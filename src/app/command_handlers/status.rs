use crate::app::command_support::load_install_runtime;
use crate::install::{GatePhase, StatusGate};

pub fn cmd_status() -> Result<String, String> {
    let mut runtime = load_install_runtime()?;
    let mut gate = StatusGate::new();
    let report = gate.run(&runtime.client, &mut runtime.store, &runtime.log);

    let mut lines = vec![
        format!("api_base={}", runtime.settings.api_base),
        format!(
            "setup_step={}",
            report
                .setup_step
                .as_ref()
                .map(|step| step.as_str())
                .unwrap_or("unknown")
        ),
    ];
    if let Some(setup_at) = &report.setup_at {
        lines.push(format!("setup_at={setup_at}"));
    }
    lines.push(format!(
        "init_status={}",
        report
            .init_status
            .as_ref()
            .map(|status| status.as_str())
            .unwrap_or("skipped")
    ));
    lines.push(format!(
        "local_flag={}",
        runtime.local_flag()?.unwrap_or_else(|| "<unset>".to_string())
    ));
    lines.push(format!("gate={}", report.phase.as_str()));
    if let GatePhase::Redirecting(navigation) = report.phase {
        lines.extend(runtime.navigation_lines(navigation));
    }
    if let Some(failure) = &report.failure {
        lines.push(format!("status_check_error={failure}"));
    }
    Ok(lines.join("\n"))
}
