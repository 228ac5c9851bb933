mod dispatcher;
mod event_log;
pub mod ports;

pub use dispatcher::Dispatcher;
pub use event_log::{EventLog, LOG_CAPACITY};
