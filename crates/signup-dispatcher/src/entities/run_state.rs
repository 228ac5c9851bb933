/// Mutable progress of the current run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    pub is_running: bool,
    pub sent_count: u32,
}

impl RunState {
    /// State at the beginning of a fresh run
    pub fn started() -> Self {
        Self {
            is_running: true,
            sent_count: 0,
        }
    }
}
