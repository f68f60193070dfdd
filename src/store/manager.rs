use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{debug, error, warn};

use crate::error::{CalError, Result};
use crate::models::{DayLog, MacroTotals, MealEntry, MealSlot, Product};
use crate::store::persistence::{self, StoreDocument};

/// Default backing file, resolved against the working directory.
pub const DEFAULT_FILE: &str = "calories.json";

/// Owns the product catalog and the per-day meal log.
///
/// Invalid references (unknown product, out-of-range index) are silent
/// no-ops throughout; callers validate preconditions and report to the
/// user. Mutations mark the store dirty, and `save` only writes when
/// something actually changed.
pub struct NutritionStore {
    /// Products keyed by display name.
    products: HashMap<String, Product>,

    /// Day logs keyed by "YYYY-MM-DD".
    day_logs: HashMap<String, DayLog>,

    dirty: bool,

    path: PathBuf,
}

impl NutritionStore {
    /// Open the store backed by `path`, loading it once.
    ///
    /// A missing file starts an empty store; a malformed file does too,
    /// with a warning. Neither is an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let document = match persistence::load_document(&path) {
            Ok(document) => {
                debug!(
                    "loaded {}: {} products, {} day logs",
                    path.display(),
                    document.products.len(),
                    document.entries.len()
                );
                document
            }
            Err(CalError::Io(e)) if e.kind() == ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => {
                warn!("could not load {}, starting empty: {}", path.display(), e);
                StoreDocument::default()
            }
        };

        Self {
            products: document.products,
            day_logs: document.entries,
            dirty: false,
            path,
        }
    }

    // --- catalog ---

    /// Insert or overwrite the product at `name`. Last write wins; no
    /// "already exists" error. Existing entries are not touched.
    pub fn add_product(&mut self, name: &str, product: Product) {
        self.products
            .insert(name.to_string(), product.with_derived_calories());
        self.dirty = true;
    }

    /// Replace the product at `old_name` with `product` at `new_name`,
    /// then relabel and recompute every entry logged against either
    /// name using the new profile.
    pub fn update_product(&mut self, old_name: &str, new_name: &str, product: Product) {
        if old_name != new_name {
            self.products.remove(old_name);
        }
        self.products
            .insert(new_name.to_string(), product.with_derived_calories());
        self.dirty = true;
        self.recompute_entries(old_name, new_name);
    }

    /// Delete the product and every entry referencing it, across all
    /// dates and slots. No-op when the product is unknown.
    pub fn remove_product(&mut self, name: &str) {
        if self.products.remove(name).is_none() {
            return;
        }
        for day in self.day_logs.values_mut() {
            for slot in MealSlot::ALL {
                day.slot_mut(slot).retain(|entry| entry.product != name);
            }
        }
        self.dirty = true;
    }

    pub fn products(&self) -> &HashMap<String, Product> {
        &self.products
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn has_product(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    fn recompute_entries(&mut self, old_name: &str, new_name: &str) {
        let Some(product) = self.products.get(new_name).cloned() else {
            return;
        };

        for day in self.day_logs.values_mut() {
            for slot in MealSlot::ALL {
                for entry in day.slot_mut(slot) {
                    if entry.product != old_name && entry.product != new_name {
                        continue;
                    }
                    entry.product = new_name.to_string();
                    entry.recompute(&product);
                }
            }
        }
        self.dirty = true;
    }

    // --- meal log ---

    /// Append an entry to `date`/`slot`, snapshotting nutrition from the
    /// product profile and stamping the current wall-clock time. No-op
    /// when the product is unknown.
    pub fn add_meal_entry(
        &mut self,
        date: &str,
        slot: MealSlot,
        product_name: &str,
        amount: f64,
        is_grams: bool,
    ) {
        let Some(product) = self.products.get(product_name) else {
            return;
        };

        let time = Local::now().format("%H:%M").to_string();
        let entry = MealEntry::derive(product_name, amount, is_grams, product, time);
        self.day_logs
            .entry(date.to_string())
            .or_default()
            .slot_mut(slot)
            .push(entry);
        self.dirty = true;
    }

    /// Rewrite the entry at `date`/`slot`/`index` in place, recomputing
    /// its nutrition snapshot. No-op on an invalid index or unknown
    /// product. The entry keeps its `time` stamp.
    pub fn update_meal_entry(
        &mut self,
        date: &str,
        slot: MealSlot,
        index: usize,
        product_name: &str,
        amount: f64,
        is_grams: bool,
    ) {
        let Some(product) = self.products.get(product_name).cloned() else {
            return;
        };
        let Some(entry) = self
            .day_logs
            .get_mut(date)
            .and_then(|day| day.slot_mut(slot).get_mut(index))
        else {
            return;
        };

        entry.product = product_name.to_string();
        entry.amount = amount;
        entry.is_grams = is_grams;
        entry.recompute(&product);
        self.dirty = true;
    }

    /// Remove the entry at `date`/`slot`/`index`; later entries shift
    /// down by one. No-op on an invalid address.
    pub fn remove_meal_entry(&mut self, date: &str, slot: MealSlot, index: usize) {
        let Some(entries) = self.day_logs.get_mut(date).map(|day| day.slot_mut(slot)) else {
            return;
        };
        if index >= entries.len() {
            return;
        }
        entries.remove(index);
        self.dirty = true;
    }

    // --- queries ---

    /// The four-slot log for `date`; all slots empty when the date has
    /// no entries yet.
    pub fn day_data(&self, date: &str) -> DayLog {
        self.day_logs.get(date).cloned().unwrap_or_default()
    }

    pub fn day_total_calories(&self, date: &str) -> u32 {
        self.day_logs
            .get(date)
            .map(|day| day.iter_all().map(|entry| entry.calories).sum())
            .unwrap_or(0)
    }

    pub fn meal_total_calories(&self, date: &str, slot: MealSlot) -> u32 {
        self.day_logs
            .get(date)
            .map(|day| day.slot(slot).iter().map(|entry| entry.calories).sum())
            .unwrap_or(0)
    }

    pub fn day_total_macros(&self, date: &str) -> MacroTotals {
        match self.day_logs.get(date) {
            Some(day) => MacroTotals::from_entries(day.iter_all()),
            None => MacroTotals::default(),
        }
    }

    pub fn meal_total_macros(&self, date: &str, slot: MealSlot) -> MacroTotals {
        match self.day_logs.get(date) {
            Some(day) => MacroTotals::from_entries(day.slot(slot).iter()),
            None => MacroTotals::default(),
        }
    }

    /// All dates with a log, sorted ascending.
    pub fn logged_dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self.day_logs.keys().map(String::as_str).collect();
        dates.sort_unstable();
        dates
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // --- persistence ---

    /// Write the store to its backing file if anything changed.
    ///
    /// Returns whether a write happened. On failure the dirty flag is
    /// kept so a later save retries.
    pub fn try_save(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }

        let document = StoreDocument {
            products: self.products.clone(),
            entries: self.day_logs.clone(),
        };
        persistence::save_document(&self.path, &document)?;
        self.dirty = false;
        Ok(true)
    }

    /// Like `try_save`, but failures are logged instead of returned.
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            error!("could not save {}: {}", self.path.display(), e);
        }
    }
}
