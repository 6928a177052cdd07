use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, Reps, Sets, Weight};

/// One movement within a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self::with_defaults(name, &EntryDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(name: Name, defaults: &EntryDefaults) -> Self {
        Self {
            id: ExerciseID::random(),
            name,
            sets: defaults.sets,
            reps: defaults.reps,
            weight: defaults.weight,
        }
    }

    /// Sets × reps × weight, saturating at `u64::MAX`.
    #[must_use]
    pub fn volume(&self) -> u64 {
        u64::from(u32::from(self.sets))
            .saturating_mul(u64::from(u32::from(self.reps)))
            .saturating_mul(u64::from(u32::from(self.weight)))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Values a freshly added exercise starts with, and the amount the weight buttons move by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDefaults {
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Weight,
    pub weight_step: u32,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            sets: Sets::clamped(3),
            reps: Reps::clamped(10),
            weight: Weight::new(50),
            weight_step: 5,
        }
    }
}

/// Partial edit of an exercise. Requested values may be out of range, they are clamped when
/// applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseUpdate {
    pub sets: Option<i64>,
    pub reps: Option<i64>,
    pub weight: Option<i64>,
}

impl ExerciseUpdate {
    pub fn apply(&self, exercise: &mut Exercise) {
        if let Some(sets) = self.sets {
            exercise.sets = Sets::clamped(sets);
        }
        if let Some(reps) = self.reps {
            exercise.reps = Reps::clamped(reps);
        }
        if let Some(weight) = self.weight {
            exercise.weight = Weight::clamped(weight);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_none() && self.reps.is_none() && self.weight.is_none()
    }
}
