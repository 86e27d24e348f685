//! "Create your own roll" dessert configurator.

pub mod engine;
pub mod options;
pub mod view;

pub use engine::{DessertBuilder, DessertSelection, WizardStep};
pub use options::{Base, Choice, Drizzle, MixIn, MultiChoice, SingleChoice, Topping};
pub use view::CustomBuilder;
