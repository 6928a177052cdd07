use std::collections::BTreeSet;

use crate::{ExerciseID, Routine, RoutineID};

/// Exercises marked as done while a routine is being performed. Lives only as long as the
/// current performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSession {
    pub routine_id: RoutineID,
    pub completed: BTreeSet<ExerciseID>,
}

impl TrainingSession {
    #[must_use]
    pub fn new(routine_id: RoutineID) -> Self {
        Self {
            routine_id,
            completed: BTreeSet::new(),
        }
    }

    /// Flips the completion state of the exercise. Returns whether it is completed afterwards.
    pub fn toggle(&mut self, exercise_id: ExerciseID) -> bool {
        if self.completed.remove(&exercise_id) {
            false
        } else {
            self.completed.insert(exercise_id);
            true
        }
    }

    #[must_use]
    pub fn is_completed(&self, exercise_id: ExerciseID) -> bool {
        self.completed.contains(&exercise_id)
    }

    #[must_use]
    pub fn is_complete(&self, routine: &Routine) -> bool {
        !routine.exercises.is_empty()
            && routine
                .exercises
                .iter()
                .all(|e| self.completed.contains(&e.id))
    }

    pub fn retain(&mut self, routine: &Routine) {
        self.completed.retain(|id| routine.contains(*id));
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }
}
