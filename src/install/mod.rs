pub mod draft;
pub mod gate;
pub mod messages;
pub mod navigation;
pub mod submit;
pub mod validate;

pub use draft::{AccountDraft, AccountField, ACCOUNT_FIELDS};
pub use gate::{
    GatePhase, GateReport, StatusGate, SETUP_FINISHED_VALUE, SETUP_STATUS_KEY,
};
pub use navigation::{Navigation, NavigationMode, Route};
pub use submit::{PreparedSubmit, SubmissionHandler, SubmitError};
pub use validate::{validate_account_draft, ValidationCode, ValidationReport};
