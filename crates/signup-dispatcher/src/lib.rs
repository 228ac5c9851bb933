//! Signup Dispatcher
//!
//! Submits the same signup request to a remote endpoint a fixed number of
//! times, strictly one request at a time, and keeps a bounded newest-first
//! log of every outcome. A run can be stopped at any point: the in-flight
//! request is aborted and no further request is issued.
//!
//! # Example
//!
//! ```rust,no_run
//! use signup_dispatcher::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DispatchError> {
//!     let executor = ReqwestExecutor::new(&ClientSettings::new("http://127.0.0.1:3000/signup"))?;
//!     let dispatcher = Arc::new(Dispatcher::new(executor));
//!
//!     // Stop the run from elsewhere, e.g. on Ctrl-C
//!     let stopper = dispatcher.clone();
//!     tokio::spawn(async move {
//!         if tokio::signal::ctrl_c().await.is_ok() {
//!             stopper.on_stop();
//!         }
//!     });
//!
//!     let status = dispatcher.on_start("user@example.com", "3").await?;
//!     println!("run {status}");
//!
//!     // Oldest first for display
//!     for entry in dispatcher.entries().iter().rev() {
//!         println!("{entry}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod adapters;
pub mod config;
pub mod entities;
pub mod error;
pub mod use_cases;

pub use error::DispatchError;

#[cfg(feature = "reqwest")]
pub use adapters::gateways::ReqwestExecutor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ClientSettings, DispatcherSettings};
    pub use crate::entities::{
        LogEntry, OutcomeKind, RequestOutcome, RunConfig, RunState, RunStatus, Severity,
        SignupRequest, TerminalStatus,
    };
    pub use crate::error::DispatchError;
    pub use crate::use_cases::ports::RequestExecutor;
    pub use crate::use_cases::{Dispatcher, EventLog};

    #[cfg(feature = "reqwest")]
    pub use crate::ReqwestExecutor;

    pub use tokio_util::sync::CancellationToken;
}
