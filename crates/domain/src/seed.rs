use crate::{Exercise, Name, Reps, Routine, Sets, Weight};

const SAMPLE_ROUTINES: &[(&str, &[(&str, i64, i64, i64)])] = &[
    (
        "Full Body Blast",
        &[
            ("Squat", 3, 10, 95),
            ("Push-Up", 3, 15, 0),
            ("Deadlift", 3, 5, 185),
        ],
    ),
    ("Leg Day", &[("Squats", 4, 10, 135), ("Lunges", 3, 12, 50)]),
    (
        "Push Pull Split",
        &[
            ("Bench Press", 4, 8, 135),
            ("Pull-Ups", 4, 8, 0),
            ("Barbell Rows", 4, 10, 95),
        ],
    ),
    (
        "Cardio Core",
        &[("Sprints", 6, 1, 0), ("Plank Hold", 3, 1, 0), ("Burpees", 4, 15, 0)],
    ),
];

/// Routines a new session starts with.
#[must_use]
pub fn sample_routines() -> Vec<Routine> {
    SAMPLE_ROUTINES
        .iter()
        .map(|(name, exercises)| {
            Routine::new(
                name,
                exercises
                    .iter()
                    .filter_map(|(name, sets, reps, weight)| {
                        Some(Exercise {
                            sets: Sets::clamped(*sets),
                            reps: Reps::clamped(*reps),
                            weight: Weight::clamped(*weight),
                            ..Exercise::new(Name::new(name).ok()?)
                        })
                    })
                    .collect(),
            )
        })
        .collect()
}
