use crate::install::AccountField;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const FORM_HINT_TEXT: &str =
    "Tab/Up/Down move | type to edit | Ctrl-R show/hide password | Enter set up | Esc cancel";
pub const FORM_STATUS_TEXT: &str = "Fill in the admin account, then press Enter.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Email,
    Name,
    Password,
    InstallButton,
}

pub const FOCUS_ORDER: [FormFocus; 4] = [
    FormFocus::Email,
    FormFocus::Name,
    FormFocus::Password,
    FormFocus::InstallButton,
];

impl FormFocus {
    pub fn as_str(self) -> &'static str {
        match self {
            FormFocus::Email => "email",
            FormFocus::Name => "name",
            FormFocus::Password => "password",
            FormFocus::InstallButton => "install_button",
        }
    }

    pub fn field(self) -> Option<AccountField> {
        match self {
            FormFocus::Email => Some(AccountField::Email),
            FormFocus::Name => Some(AccountField::Name),
            FormFocus::Password => Some(AccountField::Password),
            FormFocus::InstallButton => None,
        }
    }

    fn index(self) -> usize {
        FOCUS_ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        FOCUS_ORDER[(self.index() + 1) % FOCUS_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        FOCUS_ORDER[(self.index() + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    ToggleReveal,
    Submit,
    Cancel,
}

impl FormAction {
    fn as_str(self) -> &'static str {
        match self {
            FormAction::FocusNext => "focus_next",
            FormAction::FocusPrev => "focus_prev",
            FormAction::Input(_) => "input",
            FormAction::Backspace => "backspace",
            FormAction::ToggleReveal => "toggle_reveal",
            FormAction::Submit => "submit",
            FormAction::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    None,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTransition {
    pub effect: FormEffect,
    pub feedback: Option<String>,
}

impl FormTransition {
    pub(crate) fn no_op(feedback: Option<String>) -> Self {
        Self {
            effect: FormEffect::None,
            feedback,
        }
    }

    pub(crate) fn effect(effect: FormEffect) -> Self {
        Self {
            effect,
            feedback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNavError {
    InvalidTransition {
        focus: FormFocus,
        action: FormAction,
    },
}

impl std::fmt::Display for FormNavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormNavError::InvalidTransition { focus, action } => write!(
                f,
                "invalid form action: focus={} action={}",
                focus.as_str(),
                action.as_str()
            ),
        }
    }
}

pub fn form_action_from_key(key: KeyEvent) -> Option<FormAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(FormAction::Cancel),
            KeyCode::Char('r') => Some(FormAction::ToggleReveal),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(FormAction::Cancel),
        KeyCode::Up | KeyCode::BackTab => Some(FormAction::FocusPrev),
        KeyCode::Down | KeyCode::Tab => Some(FormAction::FocusNext),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(FormAction::Submit),
        KeyCode::Backspace => Some(FormAction::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(FormAction::Input(ch))
        }
        _ => None,
    }
}

fn plain_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Parses `SETUPGATE_INSTALL_SCRIPT_KEYS`. `text:<value>` expands to one key
/// per character; values cannot contain commas.
pub fn parse_scripted_install_keys(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        if let Some(value) = token.trim_start().strip_prefix("text:") {
            keys.extend(value.chars().map(|ch| plain_key(KeyCode::Char(ch))));
            continue;
        }
        let normalized = token.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            continue;
        }
        let key = match normalized.as_str() {
            "up" => plain_key(KeyCode::Up),
            "down" => plain_key(KeyCode::Down),
            "tab" => plain_key(KeyCode::Tab),
            "backtab" => KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            "enter" => plain_key(KeyCode::Enter),
            "esc" => plain_key(KeyCode::Esc),
            "backspace" => plain_key(KeyCode::Backspace),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "reveal" => KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            other => {
                return Err(format!(
                    "invalid SETUPGATE_INSTALL_SCRIPT_KEYS token `{other}`; valid tokens: up,down,tab,backtab,enter,esc,backspace,ctrl-c,reveal,text:<value>"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}
