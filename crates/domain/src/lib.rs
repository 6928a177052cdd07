#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod builder;
pub mod catalog;
mod exercise;
mod name;
mod plan;
mod routine;
mod seed;
mod store;
mod training;
mod training_session;

pub use builder::*;
pub use catalog::{CatalogFilter, Category, PICKER_EXERCISES, Section, Selection};
pub use exercise::*;
pub use name::*;
pub use plan::*;
pub use routine::*;
pub use seed::*;
pub use store::*;
pub use training::*;
pub use training_session::*;
