/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// Every requested submission was issued
    Completed,
    /// The operator stopped the run early
    Stopped,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Stopped => write!(f, "stopped"),
        }
    }
}

/// Operator-facing status message shown after a start action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalStatus {
    Completed,
    Stopped,
    /// The run never started; carries the reason
    ValidationError(String),
}

impl TerminalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TerminalStatus::Completed => "completed",
            TerminalStatus::Stopped => "stopped",
            TerminalStatus::ValidationError(_) => "validation error",
        }
    }
}

impl From<RunStatus> for TerminalStatus {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Completed => TerminalStatus::Completed,
            RunStatus::Stopped => TerminalStatus::Stopped,
        }
    }
}

impl std::fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalStatus::ValidationError(reason) => write!(f, "{}: {}", self.label(), reason),
            _ => f.write_str(self.label()),
        }
    }
}
