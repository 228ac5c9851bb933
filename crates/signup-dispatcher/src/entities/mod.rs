mod log_entry;
mod outcome;
mod run_config;
mod run_state;
mod signup;
mod status;

pub use log_entry::{LogEntry, Severity};
pub use outcome::{OutcomeKind, RequestOutcome, ABORTED_MESSAGE};
pub use run_config::RunConfig;
pub use run_state::RunState;
pub use signup::SignupRequest;
pub use status::{RunStatus, TerminalStatus};
