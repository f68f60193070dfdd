use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// The four meal buckets of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_amount() -> f64 {
    1.0
}

/// One logged consumption of a product.
///
/// Nutrition fields are snapshotted from the product profile at
/// creation/update time; they are not recomputed when the product later
/// changes, except through the explicit product-update cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Name of the catalog product this entry references.
    pub product: String,

    /// Grams when `is_grams`, serving multiples otherwise.
    #[serde(default = "default_amount")]
    pub amount: f64,

    #[serde(default)]
    pub is_grams: bool,

    pub calories: u32,

    #[serde(default)]
    pub protein: Option<u32>,

    #[serde(default)]
    pub fat: Option<u32>,

    #[serde(default)]
    pub carbs: Option<u32>,

    /// Wall-clock "HH:MM" captured at creation. Display only.
    #[serde(default)]
    pub time: String,
}

impl MealEntry {
    /// Build an entry from a product profile, deriving all nutrition
    /// fields.
    pub fn derive(
        name: &str,
        amount: f64,
        is_grams: bool,
        product: &Product,
        time: String,
    ) -> Self {
        let mut entry = Self {
            product: name.to_string(),
            amount,
            is_grams,
            calories: 0,
            protein: None,
            fat: None,
            carbs: None,
            time,
        };
        entry.recompute(product);
        entry
    }

    /// The factor applied to per-100g values: grams/100, or the serving
    /// count directly.
    pub fn multiplier(&self) -> f64 {
        if self.is_grams {
            self.amount / 100.0
        } else {
            self.amount
        }
    }

    /// Recompute the snapshotted nutrition fields from a product profile
    /// at this entry's amount and mode.
    pub fn recompute(&mut self, product: &Product) {
        let multiplier = self.multiplier();
        self.calories = (product.calories as f64 * multiplier) as u32;
        self.protein = scale_macro(product.protein, multiplier);
        self.fat = scale_macro(product.fat, multiplier);
        self.carbs = scale_macro(product.carbs, multiplier);
    }
}

/// Scale a per-100g macro value by the entry multiplier.
///
/// A value of 0 is treated the same as unknown and yields `None`.
fn scale_macro(value: Option<u32>, multiplier: f64) -> Option<u32> {
    match value {
        Some(v) if v > 0 => Some((v as f64 * multiplier) as u32),
        _ => None,
    }
}

/// The four ordered entry lists of one calendar date.
///
/// Entry order is insertion order; entries are addressed by positional
/// index for update and removal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(default)]
    pub breakfast: Vec<MealEntry>,

    #[serde(default)]
    pub lunch: Vec<MealEntry>,

    #[serde(default)]
    pub dinner: Vec<MealEntry>,

    #[serde(default)]
    pub snack: Vec<MealEntry>,
}

impl DayLog {
    pub fn slot(&self, slot: MealSlot) -> &Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snack,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<MealEntry> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    /// All entries of the day, in slot order.
    pub fn iter_all(&self) -> impl Iterator<Item = &MealEntry> {
        MealSlot::ALL.iter().flat_map(|slot| self.slot(*slot).iter())
    }

    pub fn is_empty(&self) -> bool {
        self.iter_all().next().is_none()
    }
}

/// Per-macro aggregate over a set of entries.
///
/// A macro is `None` only when no entry in scope had it defined; a
/// defined 0 and "all unknown" stay distinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroTotals {
    pub protein: Option<u32>,
    pub fat: Option<u32>,
    pub carbs: Option<u32>,
}

impl MacroTotals {
    pub fn from_entries<'a>(entries: impl Iterator<Item = &'a MealEntry>) -> Self {
        let mut totals = MacroTotals::default();
        for entry in entries {
            totals.protein = add_macro(totals.protein, entry.protein);
            totals.fat = add_macro(totals.fat, entry.fat);
            totals.carbs = add_macro(totals.carbs, entry.carbs);
        }
        totals
    }
}

fn add_macro(total: Option<u32>, value: Option<u32>) -> Option<u32> {
    match value {
        Some(v) => Some(total.unwrap_or(0) + v),
        None => total,
    }
}
