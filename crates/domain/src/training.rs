use derive_more::{Display, Into};

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sets(u32);

impl Sets {
    pub const MIN: Sets = Sets(1);

    pub fn new(value: u32) -> Result<Self, SetsError> {
        if value < Self::MIN.0 {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(saturate(value).max(Self::MIN.0))
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be 1 or more")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub const MIN: Reps = Reps(1);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if value < Self::MIN.0 {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(saturate(value).max(Self::MIN.0))
    }

    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be 1 or more")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Load in whole units of the user's weight unit.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(saturate(value))
    }

    #[must_use]
    pub fn increase(self, step: u32) -> Self {
        Self(self.0.saturating_add(step))
    }

    #[must_use]
    pub fn decrease(self, step: u32) -> Self {
        Self(self.0.saturating_sub(step))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<i64>() {
            Ok(parsed_value) if parsed_value < 0 => Err(WeightError::OutOfRange),
            Ok(parsed_value) => Ok(Weight::clamped(parsed_value)),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    OutOfRange,
    #[error("Weight must be an integer")]
    ParseError,
}

fn saturate(value: i64) -> u32 {
    if value < 0 {
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}
