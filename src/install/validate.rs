use super::draft::{AccountDraft, AccountField};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    EmailInvalid,
    NameEmpty,
    PasswordLengthInvalid,
    PasswordInvalid,
}

impl ValidationCode {
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationCode::EmailInvalid => "login.error.emailInValid",
            ValidationCode::NameEmpty => "login.error.nameEmpty",
            ValidationCode::PasswordLengthInvalid => "login.error.passwordLengthInValid",
            ValidationCode::PasswordInvalid => "login.error.passwordInvalid",
        }
    }
}

/// Per-field error codes from one submit attempt. Empty means submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<AccountField, ValidationCode>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: AccountField) -> Option<ValidationCode> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccountField, ValidationCode)> + '_ {
        self.errors.iter().map(|(field, code)| (*field, *code))
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .iter()
            .map(|(field, code)| format!("{field}={}", code.message_key()))
            .collect::<Vec<_>>();
        f.write_str(&parts.join(","))
    }
}

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn single_line() -> &'static Regex {
    static SINGLE_LINE: OnceLock<Regex> = OnceLock::new();
    SINGLE_LINE.get_or_init(|| {
        Regex::new(r"^[^\n\r\u{2028}\u{2029}]*$").expect("single line pattern compiles")
    })
}

pub fn is_email_shaped(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_shape().is_match(value)
}

pub fn validate_email(value: &str) -> Option<ValidationCode> {
    if value.is_empty() || !is_email_shaped(value) {
        return Some(ValidationCode::EmailInvalid);
    }
    None
}

pub fn validate_name(value: &str) -> Option<ValidationCode> {
    if value.is_empty() {
        return Some(ValidationCode::NameEmpty);
    }
    None
}

/// Length is counted in UTF-16 code units, as web form validation does.
pub fn validate_password(value: &str) -> Option<ValidationCode> {
    if value.encode_utf16().count() < PASSWORD_MIN_LENGTH {
        return Some(ValidationCode::PasswordLengthInvalid);
    }
    let has_letter = value.chars().any(|ch| ch.is_ascii_alphabetic());
    let has_digit = value.chars().any(|ch| ch.is_ascii_digit());
    if !(has_letter && has_digit && single_line().is_match(value)) {
        return Some(ValidationCode::PasswordInvalid);
    }
    None
}

pub fn validate_account_draft(draft: &AccountDraft) -> ValidationReport {
    let mut errors = BTreeMap::new();
    let checks = [
        (AccountField::Email, validate_email(&draft.email)),
        (AccountField::Name, validate_name(&draft.name)),
        (AccountField::Password, validate_password(&draft.password)),
    ];
    for (field, code) in checks {
        if let Some(code) = code {
            errors.insert(field, code);
        }
    }
    ValidationReport { errors }
}
