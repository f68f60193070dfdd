use std::path::Path;

use crate::error::Result;
use crate::models::MealSlot;
use crate::store::NutritionStore;

fn format_macro(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the product catalog to a CSV file, one row per product, sorted
/// by name. Unknown values become empty fields.
pub fn write_products_csv(store: &NutritionStore, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "calories_per_100g",
        "protein",
        "fat",
        "carbs",
        "serving_size",
        "calories_per_serving",
    ])?;

    let mut names: Vec<&String> = store.products().keys().collect();
    names.sort_unstable();

    for name in names {
        let product = &store.products()[name];
        wtr.write_record([
            name.clone(),
            product.calories.to_string(),
            format_macro(product.protein),
            format_macro(product.fat),
            format_macro(product.carbs),
            format_macro(product.serving_size),
            format_macro(product.calories_per_serving),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the whole meal log to a CSV file, one row per entry, in date
/// and slot order.
pub fn write_log_csv(store: &NutritionStore, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date", "meal", "product", "amount", "unit", "calories", "protein", "fat", "carbs", "time",
    ])?;

    for date in store.logged_dates() {
        let day = store.day_data(date);
        for slot in MealSlot::ALL {
            for entry in day.slot(slot) {
                let unit = if entry.is_grams { "g" } else { "serving" };
                wtr.write_record([
                    date.to_string(),
                    slot.to_string(),
                    entry.product.clone(),
                    format!("{}", entry.amount),
                    unit.to_string(),
                    entry.calories.to_string(),
                    format_macro(entry.protein),
                    format_macro(entry.fat),
                    format_macro(entry.carbs),
                    entry.time.clone(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
