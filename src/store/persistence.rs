use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DayLog, Product};

/// The on-disk document: the whole store as one JSON object.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub products: HashMap<String, Product>,

    /// Day logs keyed by "YYYY-MM-DD".
    #[serde(default)]
    pub entries: HashMap<String, DayLog>,
}

/// Load a store document from a JSON file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<StoreDocument> {
    let content = fs::read_to_string(path)?;
    let document = serde_json::from_str(&content)?;
    Ok(document)
}

/// Save a store document to a JSON file, overwriting it wholesale.
pub fn save_document<P: AsRef<Path>>(path: P, document: &StoreDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "products": {
                "Apple": {"calories": 52, "protein": null, "fat": null, "carbs": 14, "serving_size": null, "calories_per_serving": null}
            },
            "entries": {
                "2025-01-15": {
                    "breakfast": [{"product": "Apple", "amount": 150.0, "is_grams": true, "calories": 78, "protein": null, "fat": null, "carbs": 21, "time": "08:12"}],
                    "lunch": [], "dinner": [], "snack": []
                }
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document.products["Apple"].calories, 52);
        assert_eq!(document.entries["2025-01-15"].breakfast.len(), 1);
        assert_eq!(document.entries["2025-01-15"].breakfast[0].carbs, Some(21));

        let out_file = NamedTempFile::new().unwrap();
        save_document(out_file.path(), &document).unwrap();

        let reloaded = load_document(out_file.path()).unwrap();
        assert_eq!(reloaded.products.len(), 1);
        assert_eq!(reloaded.entries["2025-01-15"].breakfast[0].calories, 78);
    }

    #[test]
    fn test_missing_top_level_keys_are_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let document = load_document(file.path()).unwrap();
        assert!(document.products.is_empty());
        assert!(document.entries.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(load_document(file.path()).is_err());
    }
}
