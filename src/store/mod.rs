mod manager;
mod persistence;

pub use manager::{DEFAULT_FILE, NutritionStore};
pub use persistence::{StoreDocument, load_document, save_document};
