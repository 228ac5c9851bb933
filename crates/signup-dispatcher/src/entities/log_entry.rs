use std::time::SystemTime;

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One human-readable line of the event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: SystemTime,
    pub text: String,
    pub severity: Severity,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp: SystemTime::now(),
            text: text.into(),
            severity,
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            humantime::format_rfc3339_seconds(self.timestamp),
            self.text
        )
    }
}
