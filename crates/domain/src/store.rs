use std::collections::BTreeMap;

use log::{debug, info};

use crate::{Aggregate, Exercise, ExerciseID, ExerciseUpdate, Routine, RoutineID, TrainingSession};

/// In-memory collection of routines owned by one app session.
///
/// Operations never fail. Unknown routine or exercise ids turn an operation into a no-op
/// (or a zero result), callers check existence first if they want to tell the user.
#[derive(Debug, Default, Clone)]
pub struct RoutineStore {
    routines: Vec<Routine>,
    sessions: BTreeMap<RoutineID, TrainingSession>,
}

macro_rules! log_on_missing {
    ($lookup: expr, $action: literal, $entity: literal, $id: expr) => {{
        let result = $lookup;
        if result.is_none() {
            debug!("failed to {} {}: {:?} not found", $action, $entity, $id);
        }
        result
    }};
}

impl RoutineStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_routines(routines: Vec<Routine>) -> Self {
        Self {
            routines,
            sessions: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    #[must_use]
    pub fn routine(&self, id: RoutineID) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    #[must_use]
    pub fn into_routines(self) -> Vec<Routine> {
        self.routines
    }

    pub fn add_routine(&mut self, routine: Routine) {
        debug!("add routine \"{}\"", routine.name);
        self.routines.push(routine);
    }

    pub fn rename_routine(&mut self, id: RoutineID, name: &str) {
        if let Some(routine) = log_on_missing!(
            self.routines.iter_mut().find(|r| r.id == id),
            "rename",
            "routine",
            id
        ) {
            name.clone_into(&mut routine.name);
        }
    }

    pub fn remove_routine(&mut self, id: RoutineID) {
        if let Some(index) = log_on_missing!(
            self.routines.iter().position(|r| r.id == id),
            "remove",
            "routine",
            id
        ) {
            self.routines.remove(index);
            match self.routines.iter().find(|r| r.id == id) {
                Some(routine) => {
                    if let Some(session) = self.sessions.get_mut(&id) {
                        session.retain(routine);
                    }
                }
                None => {
                    self.sessions.remove(&id);
                }
            }
        }
    }

    pub fn add_exercise(&mut self, routine_id: RoutineID, exercise: Exercise) {
        let Some(routine) = log_on_missing!(
            self.routines.iter_mut().find(|r| r.id == routine_id),
            "add exercise to",
            "routine",
            routine_id
        ) else {
            return;
        };

        if routine.contains(exercise.id) {
            debug!(
                "failed to add exercise to routine {routine_id:?}: {:?} already present",
                exercise.id
            );
            return;
        }

        routine.exercises.push(exercise);
    }

    pub fn update_exercise(
        &mut self,
        routine_id: RoutineID,
        exercise_id: ExerciseID,
        update: ExerciseUpdate,
    ) {
        if let Some(exercise) = log_on_missing!(
            self.routines
                .iter_mut()
                .find(|r| r.id == routine_id)
                .and_then(|r| r.exercise_mut(exercise_id)),
            "update",
            "exercise",
            (routine_id, exercise_id)
        ) {
            update.apply(exercise);
        }
    }

    pub fn remove_exercise(&mut self, routine_id: RoutineID, exercise_id: ExerciseID) {
        let Some(routine) = log_on_missing!(
            self.routines.iter_mut().find(|r| r.id == routine_id),
            "remove exercise from",
            "routine",
            routine_id
        ) else {
            return;
        };

        let Some(index) = log_on_missing!(
            routine.exercises.iter().position(|e| e.id == exercise_id),
            "remove",
            "exercise",
            exercise_id
        ) else {
            return;
        };

        routine.exercises.remove(index);

        if let Some(session) = self.sessions.get_mut(&routine_id) {
            session.retain(routine);
        }
    }

    /// Marks the exercise as done, or undone if it was done already. Returns whether every
    /// exercise of the routine is done afterwards.
    pub fn toggle_completion(&mut self, routine_id: RoutineID, exercise_id: ExerciseID) -> bool {
        let Some(routine) = log_on_missing!(
            self.routines.iter().find(|r| r.id == routine_id),
            "toggle completion of",
            "routine",
            routine_id
        ) else {
            return false;
        };

        if !routine.contains(exercise_id) {
            debug!("failed to toggle completion of exercise: {exercise_id:?} not found");
            return self
                .sessions
                .get(&routine_id)
                .is_some_and(|s| s.is_complete(routine));
        }

        let session = self
            .sessions
            .entry(routine_id)
            .or_insert_with(|| TrainingSession::new(routine_id));
        session.toggle(exercise_id);

        let complete = session.is_complete(routine);
        if complete {
            info!("routine \"{}\" complete", routine.name);
        }
        complete
    }

    #[must_use]
    pub fn is_completed(&self, routine_id: RoutineID, exercise_id: ExerciseID) -> bool {
        self.sessions
            .get(&routine_id)
            .is_some_and(|s| s.is_completed(exercise_id))
    }

    #[must_use]
    pub fn is_complete(&self, routine_id: RoutineID) -> bool {
        match (self.routine(routine_id), self.sessions.get(&routine_id)) {
            (Some(routine), Some(session)) => session.is_complete(routine),
            _ => false,
        }
    }

    pub fn reset_completion(&mut self, routine_id: RoutineID) {
        if let Some(session) = self.sessions.get_mut(&routine_id) {
            session.reset();
        }
    }

    #[must_use]
    pub fn aggregate(&self, routine_id: RoutineID) -> Aggregate {
        self.routine(routine_id)
            .map(Routine::aggregate)
            .unwrap_or_default()
    }
}
