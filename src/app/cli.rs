#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Install,
    Status,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "install" => CliVerb::Install,
        "status" => CliVerb::Status,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  install                              Check setup status, then run the admin install form"
            .to_string(),
        "  install --email E --name N --password P".to_string(),
        "                                       Create the admin account without the form"
            .to_string(),
        "  status                               Show setup/init status and the local setup flag"
            .to_string(),
        "  help                                 Show this help".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    let mut lines = cli_help_lines();
    lines.push(String::new());
    lines.push("Environment:".to_string());
    lines.push("  SETUPGATE_API_BASE                   Override the console API base URL".to_string());
    lines.push("  SETUPGATE_WEB_BASE                   Override the web base URL used for redirects".to_string());
    lines.push(
        "  SETUPGATE_INSTALL_SCRIPT_KEYS        Drive the install form with scripted keys"
            .to_string(),
    );
    lines.join("\n")
}
