pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod store;

pub use error::{CalError, Result};
pub use models::{DayLog, MacroTotals, MealEntry, MealSlot, Product};
pub use store::NutritionStore;
