/// English text for the `login.*` message keys used by the install page.
/// Unknown keys render as themselves.
pub fn text(key: &str) -> &str {
    match key {
        "login.setAdminAccount" => "Setting up an admin account",
        "login.setAdminAccountDesc" => {
            "Maximum privileges for admin account, which can be used to create applications and manage LLM providers, etc."
        }
        "login.email" => "Email address",
        "login.emailPlaceholder" => "Your email",
        "login.name" => "Username",
        "login.namePlaceholder" => "Your username",
        "login.password" => "Password",
        "login.passwordPlaceholder" => "Your password",
        "login.installBtn" => "Set up",
        "login.license.tip" => "Before starting Community Edition, read the",
        "login.license.link" => "Open-source License",
        "login.error.emailInValid" => "Please enter a valid email address",
        "login.error.nameEmpty" => "Name is required",
        "login.error.passwordLengthInValid" => "Password must be at least 8 characters",
        "login.error.passwordInvalid" => {
            "Password must contain letters and numbers, and the length must be greater than 8"
        }
        "login.loading" => "Checking setup status...",
        "login.submitting" => "Creating admin account...",
        _ => key,
    }
}
