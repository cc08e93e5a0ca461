pub mod errors;
pub mod flag_store;
pub mod fs_atomic;
pub mod logging;

pub use errors::FlagStoreError;
pub use flag_store::{FileFlagStore, FlagStore, MemoryFlagStore};
pub use logging::DiagnosticLog;
