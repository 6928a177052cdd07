use derive_more::{AsRef, Display};

pub const UNTITLED_ROUTINE: &str = "Untitled Routine";

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Case-insensitive substring match. A blank query matches every name.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.0
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Name given to a newly created routine. Only a completely empty input falls back to the
/// placeholder, whitespace is kept as typed.
#[must_use]
pub fn routine_name(input: &str) -> String {
    if input.is_empty() {
        UNTITLED_ROUTINE.to_string()
    } else {
        input.to_string()
    }
}
