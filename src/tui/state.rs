use super::navigation::{
    FormAction, FormEffect, FormFocus, FormNavError, FormTransition, FORM_HINT_TEXT,
    FORM_STATUS_TEXT,
};
use crate::install::{AccountDraft, ValidationReport};

/// Everything the install form owns while it is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub draft: AccountDraft,
    pub focus: FormFocus,
    pub reveal_password: bool,
    pub report: ValidationReport,
    pub status_text: String,
    pub hint_text: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: AccountDraft::default(),
            focus: FormFocus::Email,
            reveal_password: false,
            report: ValidationReport::default(),
            status_text: FORM_STATUS_TEXT.to_string(),
            hint_text: FORM_HINT_TEXT.to_string(),
        }
    }

    pub fn discard_draft(&mut self) {
        self.draft = AccountDraft::default();
        self.report = ValidationReport::default();
    }
}

pub fn form_transition(
    state: &mut FormState,
    action: FormAction,
) -> Result<FormTransition, FormNavError> {
    match action {
        FormAction::FocusNext => {
            state.focus = state.focus.next();
            Ok(FormTransition::no_op(None))
        }
        FormAction::FocusPrev => {
            state.focus = state.focus.prev();
            Ok(FormTransition::no_op(None))
        }
        FormAction::Input(ch) => {
            let Some(field) = state.focus.field() else {
                return Err(FormNavError::InvalidTransition {
                    focus: state.focus,
                    action,
                });
            };
            state.draft.push_char(field, ch);
            Ok(FormTransition::no_op(None))
        }
        FormAction::Backspace => {
            if let Some(field) = state.focus.field() {
                state.draft.pop_char(field);
            }
            Ok(FormTransition::no_op(None))
        }
        FormAction::ToggleReveal => {
            state.reveal_password = !state.reveal_password;
            let feedback = if state.reveal_password {
                "password shown"
            } else {
                "password hidden"
            };
            Ok(FormTransition::no_op(Some(feedback.to_string())))
        }
        FormAction::Submit => Ok(FormTransition::effect(FormEffect::Submit)),
        FormAction::Cancel => Ok(FormTransition::effect(FormEffect::Cancel)),
    }
}
