use std::num::NonZeroU32;

use crate::error::DispatchError;

/// Parameters of a single run, fixed once the run starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    target: String,
    total_count: NonZeroU32,
}

impl RunConfig {
    pub fn new(target: impl Into<String>, total_count: NonZeroU32) -> Self {
        Self {
            target: target.into(),
            total_count,
        }
    }

    /// Build a config from raw operator input.
    ///
    /// The count must be a positive integer; surrounding whitespace is ignored.
    pub fn from_input(target: impl Into<String>, count: &str) -> Result<Self, DispatchError> {
        Ok(Self::new(target, parse_count(count)?))
    }

    /// Email address submitted in every request body
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn total_count(&self) -> NonZeroU32 {
        self.total_count
    }
}

fn parse_count(input: &str) -> Result<NonZeroU32, DispatchError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DispatchError::InvalidCount("missing send count".to_string()));
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| DispatchError::InvalidCount(format!("`{trimmed}` is not a number")))?;

    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| DispatchError::InvalidCount(format!("{value} is not a positive count")))
}
