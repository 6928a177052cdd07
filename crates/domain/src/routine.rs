use derive_more::Deref;
use uuid::Uuid;

use crate::{Exercise, ExerciseID, name::routine_name};

/// A named, ordered list of exercises. The same movement may appear more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Routine {
    #[must_use]
    pub fn new(name: &str, exercises: Vec<Exercise>) -> Self {
        Self {
            id: RoutineID::random(),
            name: routine_name(name),
            exercises,
        }
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.aggregate().total_sets
    }

    #[must_use]
    pub fn volume(&self) -> u64 {
        self.aggregate().total_volume
    }

    #[must_use]
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::of(&self.exercises)
    }

    #[must_use]
    pub fn exercise(&self, id: ExerciseID) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_mut(&mut self, id: ExerciseID) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: ExerciseID) -> bool {
        self.exercise(id).is_some()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub total_sets: u32,
    pub total_volume: u64,
}

impl Aggregate {
    /// Sums sets and volume over the exercises, saturating instead of overflowing.
    #[must_use]
    pub fn of(exercises: &[Exercise]) -> Self {
        exercises.iter().fold(Self::default(), |acc, e| Self {
            total_sets: acc.total_sets.saturating_add(u32::from(e.sets)),
            total_volume: acc.total_volume.saturating_add(e.volume()),
        })
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoutineID(Uuid);

impl RoutineID {
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

impl From<Uuid> for RoutineID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RoutineID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Name, Reps, Sets, Weight};

    use super::*;

    fn exercise(id: u128, name: &str, sets: u32, reps: u32, weight: u32) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            sets: Sets::new(sets).unwrap(),
            reps: Reps::new(reps).unwrap(),
            weight: Weight::new(weight),
        }
    }

    static LEG_DAY: std::sync::LazyLock<Routine> = std::sync::LazyLock::new(|| Routine {
        id: 1.into(),
        name: String::from("Leg Day"),
        exercises: vec![
            exercise(1, "Squats", 4, 10, 135),
            exercise(2, "Lunges", 3, 12, 50),
        ],
    });

    #[test]
    fn test_routine_new() {
        let routine = Routine::new("", vec![]);
        assert_eq!(routine.name, "Untitled Routine");
        assert!(!routine.id.is_nil());
        assert_eq!(Routine::new("Push", vec![]).name, "Push");
    }

    #[test]
    fn test_routine_aggregate() {
        assert_eq!(
            LEG_DAY.aggregate(),
            Aggregate {
                total_sets: 7,
                total_volume: 7200,
            }
        );
    }

    #[test]
    fn test_routine_aggregate_is_order_independent() {
        let mut reversed = LEG_DAY.clone();
        reversed.exercises.reverse();
        assert_eq!(reversed.aggregate(), LEG_DAY.aggregate());
    }

    #[test]
    fn test_routine_aggregate_counts_duplicates() {
        let mut routine = LEG_DAY.clone();
        routine.exercises.push(exercise(3, "Squats", 4, 10, 135));
        assert_eq!(routine.num_sets(), 11);
        assert_eq!(routine.volume(), 12_600);
    }

    #[test]
    fn test_aggregate_of_saturates() {
        let mut heavy = exercise(1, "Squats", 1, 1, 1);
        heavy.sets = Sets::clamped(i64::MAX);
        heavy.weight = Weight::clamped(i64::MAX);
        heavy.reps = Reps::clamped(i64::MAX);
        assert_eq!(
            Aggregate::of(&[heavy.clone(), heavy]),
            Aggregate {
                total_sets: u32::MAX,
                total_volume: u64::MAX,
            }
        );
    }

    #[test]
    fn test_routine_aggregate_empty() {
        assert_eq!(Routine::new("Empty", vec![]).aggregate(), Aggregate::default());
    }

    #[rstest]
    #[case(1, true)]
    #[case(2, true)]
    #[case(3, false)]
    fn test_routine_contains(#[case] id: u128, #[case] expected: bool) {
        assert_eq!(LEG_DAY.contains(id.into()), expected);
    }

    #[test]
    fn test_routine_exercise_mut() {
        let mut routine = LEG_DAY.clone();
        if let Some(e) = routine.exercise_mut(2.into()) {
            e.weight = Weight::new(60);
        }
        assert_eq!(routine.exercise(2.into()).unwrap().weight, Weight::new(60));
    }

    #[test]
    fn test_routine_id_nil() {
        assert!(RoutineID::nil().is_nil());
        assert_eq!(RoutineID::nil(), RoutineID::default());
    }
}
