pub mod actions;
pub mod navigation;
pub mod screens;
pub mod state;

pub use actions::{
    is_interactive_terminal, load_scripted_install_keys, run_install_scripted, run_install_tui,
    InstallContext, InstallOutcome, SCRIPT_KEYS_ENV,
};
pub use navigation::{
    form_action_from_key, parse_scripted_install_keys, FormAction, FormEffect, FormFocus,
    FormNavError, FormTransition,
};
pub use screens::{project_install_view_model, InstallViewModel};
pub use state::{form_transition, FormState};
