use strum::{EnumIter, IntoEnumIterator};

use crate::{EntryDefaults, Exercise, Name};

/// Exercises offered by the quick picker of the routine builder.
pub const PICKER_EXERCISES: &[&str] = &["Push-Up", "Squat", "Deadlift", "Pull-Up", "Bench Press"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Category {
    Strength,
    Recovery,
    Conditioning,
}

impl Category {
    pub fn iter() -> impl Iterator<Item = Category> {
        <Self as IntoEnumIterator>::iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength (Weightlifting)",
            Category::Recovery => "Recovery",
            Category::Conditioning => "Conditioning (Cardio)",
        }
    }

    #[must_use]
    pub fn sections(self) -> &'static [Section] {
        match self {
            Category::Strength => STRENGTH,
            Category::Recovery => RECOVERY,
            Category::Conditioning => CONDITIONING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub exercises: &'static [&'static str],
}

const STRENGTH: &[Section] = &[
    Section {
        title: "Chest Workouts",
        exercises: &["Bench Press", "Incline Dumbbell Press", "Chest Flys"],
    },
    Section {
        title: "Back Workouts",
        exercises: &["Deadlift", "Pull-Ups", "Barbell Rows"],
    },
];

const RECOVERY: &[Section] = &[
    Section {
        title: "Stretching",
        exercises: &["Hamstring Stretch", "Hip Flexor Stretch", "Quad Stretch"],
    },
    Section {
        title: "Foam Rolling",
        exercises: &["Lower Back Roll", "Upper Back Roll", "Thigh Roll"],
    },
];

const CONDITIONING: &[Section] = &[
    Section {
        title: "Running",
        exercises: &["5K Run", "Sprints", "Interval Running"],
    },
    Section {
        title: "Cycling",
        exercises: &["10-mile Ride", "Interval Cycling", "Hill Sprints"],
    },
];

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogFilter {
    pub name: String,
}

impl CatalogFilter {
    /// Sections of the category restricted to matching exercises. Sections without a match
    /// are left out.
    #[must_use]
    pub fn sections(&self, category: Category) -> Vec<(&'static str, Vec<&'static str>)> {
        category
            .sections()
            .iter()
            .map(|s| {
                (
                    s.title,
                    s.exercises
                        .iter()
                        .copied()
                        .filter(|e| self.matches(e))
                        .collect::<Vec<_>>(),
                )
            })
            .filter(|(_, exercises)| !exercises.is_empty())
            .collect()
    }

    /// First matching exercise in section order, used as scroll target while searching.
    #[must_use]
    pub fn first_match(&self, category: Category) -> Option<&'static str> {
        if self.is_empty() {
            return None;
        }
        category
            .sections()
            .iter()
            .flat_map(|s| s.exercises.iter().copied())
            .find(|e| self.matches(e))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }

    fn matches(&self, exercise: &str) -> bool {
        exercise
            .to_lowercase()
            .contains(self.name.to_lowercase().trim())
    }
}

/// Exercises picked from the catalog, in the order they were picked.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    names: Vec<&'static str>,
}

impl Selection {
    pub fn toggle(&mut self, name: &'static str) {
        if let Some(index) = self.names.iter().position(|n| *n == name) {
            self.names.remove(index);
        } else {
            self.names.push(name);
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn label(&self) -> String {
        let count = self.count();
        format!("Add {count} Workout{}", if count == 1 { "" } else { "s" })
    }

    #[must_use]
    pub fn exercises(&self, defaults: &EntryDefaults) -> Vec<Exercise> {
        self.names
            .iter()
            .filter_map(|n| Name::new(n).ok())
            .map(|name| Exercise::with_defaults(name, defaults))
            .collect()
    }
}
