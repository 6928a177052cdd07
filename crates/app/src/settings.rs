use alpha_domain::{EntryDefaults, Reps, Sets, Weight};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

const KILOGRAMS_PER_POUND: f32 = 0.453_592_37;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub unit_system: UnitSystem,
    pub weight_unit: WeightUnit,
    pub distance_unit: DistanceUnit,
    pub body_measurement_unit: BodyMeasurementUnit,
    pub default_sets: u32,
    pub default_reps: u32,
    pub default_weight: u32,
    pub weight_step: u32,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switches the unit system. Each unit follows unless it already belongs to the new
    /// system.
    pub fn select_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
        follow(&mut self.weight_unit, unit_system.weight_units());
        follow(&mut self.distance_unit, unit_system.distance_units());
        follow(&mut self.body_measurement_unit, unit_system.body_measurement_units());
    }

    #[must_use]
    pub fn entry_defaults(&self) -> EntryDefaults {
        EntryDefaults {
            sets: Sets::clamped(i64::from(self.default_sets)),
            reps: Reps::clamped(i64::from(self.default_reps)),
            weight: Weight::new(self.default_weight),
            weight_step: self.weight_step,
        }
    }
}

fn follow<T: Copy + PartialEq>(unit: &mut T, units: &[T]) {
    if units.contains(unit) {
        return;
    }
    if let Some(first) = units.first() {
        *unit = *first;
    }
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = EntryDefaults::default();
        Self {
            unit_system: UnitSystem::Metric,
            weight_unit: WeightUnit::Kilograms,
            distance_unit: DistanceUnit::Meters,
            body_measurement_unit: BodyMeasurementUnit::Centimeters,
            default_sets: defaults.sets.into(),
            default_reps: defaults.reps.into(),
            default_weight: defaults.weight.into(),
            weight_step: defaults.weight_step,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    #[must_use]
    pub fn weight_units(self) -> &'static [WeightUnit] {
        match self {
            UnitSystem::Metric => &[WeightUnit::Kilograms],
            UnitSystem::Imperial => &[WeightUnit::Pounds],
        }
    }

    #[must_use]
    pub fn distance_units(self) -> &'static [DistanceUnit] {
        match self {
            UnitSystem::Metric => &[DistanceUnit::Meters, DistanceUnit::Kilometers],
            UnitSystem::Imperial => &[DistanceUnit::Feet, DistanceUnit::Miles],
        }
    }

    #[must_use]
    pub fn body_measurement_units(self) -> &'static [BodyMeasurementUnit] {
        match self {
            UnitSystem::Metric => &[BodyMeasurementUnit::Centimeters],
            UnitSystem::Imperial => &[BodyMeasurementUnit::Inches],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl WeightUnit {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "Kilograms",
            WeightUnit::Pounds => "Pounds",
        }
    }

    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lbs",
        }
    }

    #[must_use]
    pub fn convert(self, value: f32, to: WeightUnit) -> f32 {
        match (self, to) {
            (WeightUnit::Kilograms, WeightUnit::Pounds) => value / KILOGRAMS_PER_POUND,
            (WeightUnit::Pounds, WeightUnit::Kilograms) => value * KILOGRAMS_PER_POUND,
            _ => value,
        }
    }

    #[must_use]
    pub fn format(self, value: u64) -> String {
        format!("{value} {}", self.abbreviation())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl DistanceUnit {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Feet => "Feet",
            DistanceUnit::Miles => "Miles",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum BodyMeasurementUnit {
    Centimeters,
    Inches,
}

impl BodyMeasurementUnit {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BodyMeasurementUnit::Centimeters => "Centimeters",
            BodyMeasurementUnit::Inches => "Inches",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.unit_system, UnitSystem::Metric);
        assert_eq!(settings.weight_unit, WeightUnit::Kilograms);
        assert_eq!(settings.distance_unit, DistanceUnit::Meters);
        assert_eq!(settings.body_measurement_unit, BodyMeasurementUnit::Centimeters);
        assert_eq!(settings.entry_defaults(), EntryDefaults::default());
    }

    #[test]
    fn test_settings_from_json() {
        let settings = Settings::from_json(
            r#"{"unit_system": "Imperial", "weight_unit": "Pounds", "distance_unit": "Miles", "default_weight": 45}"#,
        )
        .unwrap();
        assert_eq!(
            settings,
            Settings {
                unit_system: UnitSystem::Imperial,
                weight_unit: WeightUnit::Pounds,
                distance_unit: DistanceUnit::Miles,
                default_weight: 45,
                ..Settings::default()
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("{\"weight_unit\": \"Stone\"}")]
    #[case("{\"default_sets\": -1}")]
    fn test_settings_from_json_invalid(#[case] json: &str) {
        assert!(matches!(
            Settings::from_json(json),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let mut settings = Settings::default();
        settings.select_unit_system(UnitSystem::Imperial);
        settings.weight_step = 10;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_settings_entry_defaults_clamp() {
        let settings = Settings {
            default_sets: 0,
            default_reps: 0,
            ..Settings::default()
        };
        let defaults = settings.entry_defaults();
        assert_eq!(defaults.sets, Sets::MIN);
        assert_eq!(defaults.reps, Reps::MIN);
    }

    #[rstest]
    #[case(UnitSystem::Imperial, WeightUnit::Pounds)]
    #[case(UnitSystem::Metric, WeightUnit::Kilograms)]
    fn test_settings_select_unit_system(
        #[case] unit_system: UnitSystem,
        #[case] expected: WeightUnit,
    ) {
        for start in UnitSystem::iter() {
            let mut settings = Settings::default();
            settings.select_unit_system(start);
            settings.select_unit_system(unit_system);
            assert_eq!(settings.unit_system, unit_system);
            assert_eq!(settings.weight_unit, expected);
        }
    }

    #[rstest]
    #[case(UnitSystem::Imperial, DistanceUnit::Feet, BodyMeasurementUnit::Inches)]
    #[case(UnitSystem::Metric, DistanceUnit::Meters, BodyMeasurementUnit::Centimeters)]
    fn test_settings_select_unit_system_switches_all_units(
        #[case] unit_system: UnitSystem,
        #[case] distance: DistanceUnit,
        #[case] body_measurement: BodyMeasurementUnit,
    ) {
        for start in UnitSystem::iter() {
            let mut settings = Settings::default();
            settings.select_unit_system(start);
            settings.select_unit_system(unit_system);
            assert_eq!(settings.distance_unit, distance);
            assert_eq!(settings.body_measurement_unit, body_measurement);
        }
    }

    #[test]
    fn test_settings_select_unit_system_keeps_matching_unit() {
        let mut settings = Settings {
            distance_unit: DistanceUnit::Kilometers,
            ..Settings::default()
        };
        settings.select_unit_system(UnitSystem::Metric);
        assert_eq!(settings.distance_unit, DistanceUnit::Kilometers);

        settings.select_unit_system(UnitSystem::Imperial);
        settings.distance_unit = DistanceUnit::Miles;
        settings.select_unit_system(UnitSystem::Imperial);
        assert_eq!(settings.distance_unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_unit_system_units_cover_every_unit() {
        assert_eq!(
            UnitSystem::iter()
                .flat_map(|s| s.distance_units().iter().map(|u| u.name()))
                .collect::<Vec<_>>(),
            DistanceUnit::iter().map(DistanceUnit::name).collect::<Vec<_>>()
        );
        assert_eq!(
            UnitSystem::iter()
                .flat_map(|s| s.body_measurement_units().iter().map(|u| u.name()))
                .collect::<Vec<_>>(),
            vec!["Centimeters", "Inches"]
        );
    }

    #[rstest]
    #[case(WeightUnit::Pounds, 100.0, WeightUnit::Kilograms, 45.359_237)]
    #[case(WeightUnit::Kilograms, 100.0, WeightUnit::Pounds, 220.462_26)]
    #[case(WeightUnit::Kilograms, 60.0, WeightUnit::Kilograms, 60.0)]
    fn test_weight_unit_convert(
        #[case] from: WeightUnit,
        #[case] value: f32,
        #[case] to: WeightUnit,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(from.convert(value, to), expected, 0.001);
    }

    #[test]
    fn test_weight_unit_format() {
        assert_eq!(WeightUnit::Pounds.format(7200), "7200 lbs");
        assert_eq!(
            WeightUnit::iter().map(WeightUnit::name).collect::<Vec<_>>(),
            vec!["Kilograms", "Pounds"]
        );
    }
}
