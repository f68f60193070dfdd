use serde::{Deserialize, Serialize};

/// A catalog entry describing a food's nutrition profile per 100 grams.
///
/// The product's name is the catalog key, not a field. Macro values use
/// `None` for "unknown"; a product without protein data is not a
/// zero-protein product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Calories per 100 g.
    pub calories: u32,

    #[serde(default)]
    pub protein: Option<u32>,

    #[serde(default)]
    pub fat: Option<u32>,

    #[serde(default)]
    pub carbs: Option<u32>,

    /// Grams in one serving of this product.
    #[serde(default)]
    pub serving_size: Option<u32>,

    /// Calories in one serving, used only to derive `calories` when the
    /// per-100g value was not given directly.
    #[serde(default)]
    pub calories_per_serving: Option<u32>,
}

impl Product {
    /// Create a product with only a per-100g calorie value.
    pub fn with_calories(calories: u32) -> Self {
        Self {
            calories,
            protein: None,
            fat: None,
            carbs: None,
            serving_size: None,
            calories_per_serving: None,
        }
    }

    /// Apply the per-serving derivation rule.
    ///
    /// When `calories` is 0 and both serving fields are present and
    /// non-zero, derives `calories = calories_per_serving / serving_size
    /// * 100`, truncated. Otherwise the product is returned unchanged.
    pub fn with_derived_calories(mut self) -> Self {
        if self.calories == 0 {
            if let (Some(cps), Some(size)) = (self.calories_per_serving, self.serving_size) {
                if cps > 0 && size > 0 {
                    self.calories = (cps as f64 / size as f64 * 100.0) as u32;
                }
            }
        }
        self
    }

    /// Whether any macro value is known.
    pub fn has_macros(&self) -> bool {
        self.protein.is_some() || self.fat.is_some() || self.carbs.is_some()
    }
}
