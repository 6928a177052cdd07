use chrono::Weekday;
use log::debug;

/// An entry of the weekly planner. All fields are free text ("8-12", "45s", "N/A").
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub name: String,
    pub reps: String,
    pub sets: String,
    pub rest: String,
}

impl PlannedExercise {
    #[must_use]
    pub fn new(name: &str, reps: &str, sets: &str, rest: &str) -> Self {
        Self {
            name: name.to_string(),
            reps: reps.to_string(),
            sets: sets.to_string(),
            rest: rest.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub day: Weekday,
    pub workout_type: String,
    pub focus: String,
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutDay {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// A Monday to Sunday training plan with one selected day.
///
/// Indices that do not address a day or an exercise leave the plan unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    days: Vec<WorkoutDay>,
    selected: usize,
}

impl WeekPlan {
    #[must_use]
    pub fn days(&self) -> &[WorkoutDay] {
        &self.days
    }

    #[must_use]
    pub fn day(&self, index: usize) -> Option<&WorkoutDay> {
        self.days.get(index)
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> &WorkoutDay {
        &self.days[self.selected]
    }

    pub fn select(&mut self, index: usize) {
        if index < self.days.len() {
            self.selected = index;
        } else {
            debug!("failed to select day: index {index} out of range");
        }
    }

    pub fn add_exercise(&mut self, day_index: usize, exercise: PlannedExercise) {
        match self.days.get_mut(day_index) {
            Some(day) => day.exercises.push(exercise),
            None => debug!("failed to add planned exercise: day {day_index} not found"),
        }
    }

    pub fn remove_exercise(&mut self, day_index: usize, exercise_index: usize) {
        self.take_exercise(day_index, exercise_index);
    }

    /// Takes the exercise out of its day so it can be edited and added again.
    pub fn take_exercise(
        &mut self,
        day_index: usize,
        exercise_index: usize,
    ) -> Option<PlannedExercise> {
        let Some(day) = self.days.get_mut(day_index) else {
            debug!("failed to take planned exercise: day {day_index} not found");
            return None;
        };
        if exercise_index < day.exercises.len() {
            Some(day.exercises.remove(exercise_index))
        } else {
            debug!(
                "failed to take planned exercise: index {exercise_index} out of range for {}",
                day.name()
            );
            None
        }
    }
}

impl Default for WeekPlan {
    fn default() -> Self {
        let day = |day, workout_type: &str, focus: &str, exercises| WorkoutDay {
            day,
            workout_type: workout_type.to_string(),
            focus: focus.to_string(),
            exercises,
        };
        Self {
            days: vec![
                day(
                    Weekday::Mon,
                    "Push",
                    "Chest, Shoulders, Triceps",
                    vec![
                        PlannedExercise::new("Bench Press", "8-12", "4", "60s"),
                        PlannedExercise::new("Shoulder Press", "8-12", "4", "60s"),
                    ],
                ),
                day(
                    Weekday::Tue,
                    "Pull",
                    "Back, Biceps, Rear Delts",
                    vec![
                        PlannedExercise::new("Pull-Ups", "8-12", "4", "60s"),
                        PlannedExercise::new("Barbell Rows", "8-12", "4", "60s"),
                    ],
                ),
                day(
                    Weekday::Wed,
                    "Conditioning",
                    "Cardio, Agility, Core",
                    vec![
                        PlannedExercise::new("Jump Rope", "1 min", "4", "30s"),
                        PlannedExercise::new("Plank Hold", "45s", "3", "30s"),
                    ],
                ),
                day(
                    Weekday::Thu,
                    "Push",
                    "Legs (Quads, Glutes, Calves)",
                    vec![
                        PlannedExercise::new("Squats", "8-12", "4", "60s"),
                        PlannedExercise::new("Lunges", "12 reps/leg", "3", "45s"),
                    ],
                ),
                day(
                    Weekday::Fri,
                    "Pull",
                    "Posterior Chain (Hamstrings, Glutes, Back)",
                    vec![
                        PlannedExercise::new("Deadlifts", "6-10", "4", "90s"),
                        PlannedExercise::new("Hamstring Curls", "10-12", "3", "45s"),
                    ],
                ),
                day(
                    Weekday::Sat,
                    "Recovery",
                    "Mobility, Yoga, Light Cardio",
                    vec![
                        PlannedExercise::new("Yoga Flow", "20 mins", "1", "N/A"),
                        PlannedExercise::new("Foam Rolling", "10 mins", "1", "N/A"),
                    ],
                ),
                day(
                    Weekday::Sun,
                    "Conditioning",
                    "HIIT, Core, Sprints",
                    vec![
                        PlannedExercise::new("Sprints", "30s", "6", "30s"),
                        PlannedExercise::new("Burpees", "15", "4", "45s"),
                    ],
                ),
            ],
            selected: 0,
        }
    }
}
