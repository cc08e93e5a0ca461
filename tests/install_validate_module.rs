use setupgate::install::validate::{validate_email, validate_password};
use setupgate::install::{validate_account_draft, AccountDraft, AccountField, ValidationCode};

#[test]
fn install_validate_module_blocks_emails_without_address_shape() {
    for email in ["", "admin", "admin.example.com", "admin@", "@example.com", "a@b"] {
        let report = validate_account_draft(&AccountDraft::new(email, "Admin", "abcdefg1"));
        assert!(!report.is_valid(), "{email:?} should block submission");
        assert_eq!(
            report.get(AccountField::Email),
            Some(ValidationCode::EmailInvalid)
        );
        assert_eq!(
            report.get(AccountField::Email).map(|code| code.message_key()),
            Some("login.error.emailInValid")
        );
    }
}

#[test]
fn install_validate_module_short_passwords_get_length_code_only() {
    for password in ["", "a", "abc1", "1234567", "abcdefg", "ab12cd3"] {
        assert_eq!(
            validate_password(password),
            Some(ValidationCode::PasswordLengthInvalid),
            "{password:?}"
        );
    }
}

#[test]
fn install_validate_module_digit_only_passwords_get_pattern_code() {
    for password in ["12345678", "000000000000", "98765432101"] {
        assert_eq!(
            validate_password(password),
            Some(ValidationCode::PasswordInvalid),
            "{password:?}"
        );
        assert_eq!(
            ValidationCode::PasswordInvalid.message_key(),
            "login.error.passwordInvalid"
        );
    }
}

#[test]
fn install_validate_module_letters_only_passwords_get_pattern_code() {
    assert_eq!(
        validate_password("abcdefgh"),
        Some(ValidationCode::PasswordInvalid)
    );
}

#[test]
fn install_validate_module_letter_and_digit_passwords_pass() {
    for password in ["abcdefg1", "1abcdefg", "Pa55word!", "x1x1x1x1x1"] {
        assert_eq!(validate_password(password), None, "{password:?}");
    }
}

#[test]
fn install_validate_module_name_must_be_non_empty() {
    let report = validate_account_draft(&AccountDraft::new("a@b.com", "", "abcdefg1"));
    assert_eq!(
        report.get(AccountField::Name),
        Some(ValidationCode::NameEmpty)
    );
    assert_eq!(report.get(AccountField::Email), None);
    assert_eq!(report.get(AccountField::Password), None);
}

#[test]
fn install_validate_module_valid_draft_has_empty_report() {
    let report = validate_account_draft(&AccountDraft::new("a@b.com", "A", "abcdefg1"));
    assert!(report.is_valid());
    assert_eq!(report.iter().count(), 0);
    assert_eq!(validate_email("a@b.com"), None);
}

#[test]
fn install_validate_module_line_breaks_fail_the_password_pattern() {
    for password in [
        "abcdefg1\n",
        "abc\nefg12",
        "abcdefg1\r",
        "abcd\u{2028}efg1",
        "abcd\u{2029}efg1",
    ] {
        assert_eq!(
            validate_password(password),
            Some(ValidationCode::PasswordInvalid),
            "{password:?}"
        );
    }
}

#[test]
fn install_validate_module_password_length_counts_utf16_units() {
    // Each emoji is two UTF-16 units: five chars, eight units.
    assert_eq!(validate_password("😀😀😀1a"), None);
    // Two emoji and three ASCII chars: seven units.
    assert_eq!(
        validate_password("😀😀1ab"),
        Some(ValidationCode::PasswordLengthInvalid)
    );
}
