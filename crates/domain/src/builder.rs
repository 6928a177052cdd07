use log::debug;

use crate::{Aggregate, EntryDefaults, Exercise, Name, Reps, Routine, Sets, Weight};

/// Collects exercises for a new routine before it is handed to the store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoutineBuilder {
    pub name: String,
    exercises: Vec<Exercise>,
    defaults: EntryDefaults,
}

impl RoutineBuilder {
    #[must_use]
    pub fn new(defaults: EntryDefaults) -> Self {
        Self {
            name: String::new(),
            exercises: vec![],
            defaults,
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn add(&mut self, name: Name) {
        self.exercises.push(Exercise::with_defaults(name, &self.defaults));
    }

    pub fn replace(&mut self, index: usize, exercise: Exercise) {
        if let Some(e) = self.exercises.get_mut(index) {
            *e = exercise;
        } else {
            debug!("failed to replace exercise: index {index} out of range");
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        } else {
            debug!("failed to remove exercise: index {index} out of range");
        }
    }

    #[must_use]
    pub fn form(&self, index: usize) -> Option<ExerciseForm> {
        self.exercises
            .get(index)
            .map(|e| ExerciseForm::new(e.clone(), self.defaults.weight_step))
    }

    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::of(&self.exercises)
    }

    #[must_use]
    pub fn can_finish(&self) -> bool {
        !self.exercises.is_empty()
    }

    /// Returns `None` while no exercise has been added.
    #[must_use]
    pub fn finish(self) -> Option<Routine> {
        if self.can_finish() {
            Some(Routine::new(&self.name, self.exercises))
        } else {
            None
        }
    }
}

/// Editable text fields for the sets, reps and weight of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseForm {
    pub sets: String,
    pub reps: String,
    pub weight: String,
    original: Exercise,
    weight_step: u32,
}

impl ExerciseForm {
    #[must_use]
    pub fn new(exercise: Exercise, weight_step: u32) -> Self {
        Self {
            sets: exercise.sets.to_string(),
            reps: exercise.reps.to_string(),
            weight: exercise.weight.to_string(),
            original: exercise,
            weight_step,
        }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.original.name
    }

    pub fn increment_sets(&mut self) {
        if let Ok(sets) = Sets::try_from(self.sets.as_str()) {
            self.sets = sets.increment().to_string();
        }
    }

    pub fn decrement_sets(&mut self) {
        if let Ok(sets) = Sets::try_from(self.sets.as_str()) {
            self.sets = sets.decrement().to_string();
        }
    }

    pub fn increment_reps(&mut self) {
        if let Ok(reps) = Reps::try_from(self.reps.as_str()) {
            self.reps = reps.increment().to_string();
        }
    }

    pub fn decrement_reps(&mut self) {
        if let Ok(reps) = Reps::try_from(self.reps.as_str()) {
            self.reps = reps.decrement().to_string();
        }
    }

    pub fn increment_weight(&mut self) {
        if let Ok(weight) = Weight::try_from(self.weight.as_str()) {
            self.weight = weight.increase(self.weight_step).to_string();
        }
    }

    pub fn decrement_weight(&mut self) {
        if let Ok(weight) = Weight::try_from(self.weight.as_str()) {
            self.weight = weight.decrease(self.weight_step).to_string();
        }
    }

    /// Builds the edited exercise. Fields that do not hold an integer keep their original
    /// value, integers out of range are clamped.
    #[must_use]
    pub fn save(self) -> Exercise {
        let original = self.original;
        Exercise {
            sets: parse_int(&self.sets).map_or(original.sets, Sets::clamped),
            reps: parse_int(&self.reps).map_or(original.reps, Reps::clamped),
            weight: parse_int(&self.weight).map_or(original.weight, Weight::clamped),
            ..original
        }
    }
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn builder() -> RoutineBuilder {
        let mut builder = RoutineBuilder::new(EntryDefaults::default());
        builder.add(Name::new("Squat").unwrap());
        builder.add(Name::new("Deadlift").unwrap());
        builder
    }

    fn form(sets: &str, reps: &str, weight: &str) -> ExerciseForm {
        let mut form = ExerciseForm::new(Exercise::new(Name::new("Squat").unwrap()), 5);
        form.sets = sets.to_string();
        form.reps = reps.to_string();
        form.weight = weight.to_string();
        form
    }

    #[test]
    fn test_builder_add() {
        let builder = builder();
        assert_eq!(builder.exercises().len(), 2);
        assert_eq!(builder.exercises()[1].name.to_string(), "Deadlift");
        assert_eq!(
            builder.aggregate(),
            Aggregate {
                total_sets: 6,
                total_volume: 3000,
            }
        );
    }

    #[test]
    fn test_builder_replace() {
        let mut builder = builder();
        let mut exercise = builder.exercises()[0].clone();
        exercise.weight = Weight::new(100);
        builder.replace(0, exercise.clone());
        builder.replace(5, exercise.clone());
        assert_eq!(builder.exercises()[0], exercise);
        assert_eq!(builder.exercises().len(), 2);
    }

    #[rstest]
    #[case(0, vec!["Deadlift"])]
    #[case(1, vec!["Squat"])]
    #[case(2, vec!["Squat", "Deadlift"])]
    fn test_builder_remove(#[case] index: usize, #[case] expected: Vec<&str>) {
        let mut builder = builder();
        builder.remove(index);
        assert_eq!(
            builder
                .exercises()
                .iter()
                .map(|e| e.name.as_ref().as_str())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_builder_finish() {
        let mut builder = builder();
        builder.name = String::from("Pull Day");
        let exercises = builder.exercises().to_vec();
        let routine = builder.finish().unwrap();
        assert_eq!(routine.name, "Pull Day");
        assert_eq!(routine.exercises, exercises);
    }

    #[test]
    fn test_builder_finish_untitled() {
        assert_eq!(builder().finish().unwrap().name, "Untitled Routine");
    }

    #[test]
    fn test_builder_finish_empty() {
        let builder = RoutineBuilder::default();
        assert!(!builder.can_finish());
        assert_eq!(builder.finish(), None);
    }

    #[test]
    fn test_builder_form() {
        let builder = builder();
        let form = builder.form(1).unwrap();
        assert_eq!(form.name().to_string(), "Deadlift");
        assert_eq!(
            (form.sets.as_str(), form.reps.as_str(), form.weight.as_str()),
            ("3", "10", "50")
        );
        assert_eq!(builder.form(2), None);
    }

    #[rstest]
    #[case(form("3", "10", "50"), ("4", "11", "55"))]
    #[case(form("x", "10", ""), ("x", "11", ""))]
    fn test_form_increment(#[case] mut form: ExerciseForm, #[case] expected: (&str, &str, &str)) {
        form.increment_sets();
        form.increment_reps();
        form.increment_weight();
        assert_eq!(
            (form.sets.as_str(), form.reps.as_str(), form.weight.as_str()),
            expected
        );
    }

    #[rstest]
    #[case(form("3", "10", "50"), ("2", "9", "45"))]
    #[case(form("1", "1", "3"), ("1", "1", "0"))]
    #[case(form("1", "1", "0"), ("1", "1", "0"))]
    fn test_form_decrement(#[case] mut form: ExerciseForm, #[case] expected: (&str, &str, &str)) {
        form.decrement_sets();
        form.decrement_reps();
        form.decrement_weight();
        assert_eq!(
            (form.sets.as_str(), form.reps.as_str(), form.weight.as_str()),
            expected
        );
    }

    #[rstest]
    #[case(form("5", "8", "135"), (5, 8, 135))]
    #[case(form("five", "", "heavy"), (3, 10, 50))]
    #[case(form("-2", "0", "-10"), (1, 1, 0))]
    fn test_form_save(#[case] form: ExerciseForm, #[case] expected: (u32, u32, u32)) {
        let id = form.original.id;
        let exercise = form.save();
        assert_eq!(exercise.id, id);
        assert_eq!(exercise.name.to_string(), "Squat");
        assert_eq!(
            (
                u32::from(exercise.sets),
                u32::from(exercise.reps),
                u32::from(exercise.weight)
            ),
            expected
        );
    }
}
