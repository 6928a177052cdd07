#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod session;
mod settings;

pub use session::Session;
pub use settings::{
    BodyMeasurementUnit, DistanceUnit, Settings, SettingsError, UnitSystem, WeightUnit,
};
