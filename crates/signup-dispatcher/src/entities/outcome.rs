use super::Severity;

/// Message carried by an outcome whose request was aborted by a stop
pub const ABORTED_MESSAGE: &str = "request aborted";

/// Classification of a single request attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// 2xx response
    Success,
    /// Non-2xx response
    Protocol,
    /// Network, DNS or timeout failure before a response arrived
    Transport,
    /// Aborted by an explicit stop
    Cancelled,
}

/// Classified result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    pub kind: OutcomeKind,
    pub status_code: Option<u16>,
    pub message: String,
}

impl RequestOutcome {
    pub fn success(status: u16) -> Self {
        Self {
            kind: OutcomeKind::Success,
            status_code: Some(status),
            message: status.to_string(),
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Protocol,
            status_code: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Transport,
            status_code: None,
            message: message.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            kind: OutcomeKind::Cancelled,
            status_code: None,
            message: ABORTED_MESSAGE.to_string(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.kind == OutcomeKind::Success
    }

    pub fn severity(&self) -> Severity {
        if self.succeeded() {
            Severity::Success
        } else {
            Severity::Error
        }
    }

    /// Human-readable log line for a submission made on behalf of `email`
    pub fn log_line(&self, email: &str) -> String {
        match (self.kind, self.status_code) {
            (OutcomeKind::Success, Some(status)) => format!("[+] {email}… {status}"),
            (OutcomeKind::Protocol, Some(status)) => {
                format!("[-] {email}… {status} - {}", self.message)
            }
            _ => format!("[-] {email}… {}", self.message),
        }
    }
}
