use crate::models::{MacroTotals, MealEntry, MealSlot};
use crate::store::NutritionStore;

/// Format a macro triple, keeping unknown values visibly distinct from
/// zero.
pub fn format_macros(macros: &MacroTotals) -> String {
    fn field(value: Option<u32>) -> String {
        value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
    }

    format!(
        "P:{} F:{} C:{}",
        field(macros.protein),
        field(macros.fat),
        field(macros.carbs)
    )
}

fn entry_line(index: usize, entry: &MealEntry) {
    let unit = if entry.is_grams { "g" } else { "serv" };
    let macros = format_macros(&MacroTotals {
        protein: entry.protein,
        fat: entry.fat,
        carbs: entry.carbs,
    });

    println!(
        "  {:>2}. [{}] {:<24} {:>7} {:<4} {:>5} cal  {}",
        index, entry.time, entry.product, entry.amount, unit, entry.calories, macros
    );
}

/// Display the full day report: each meal section with its entries and
/// totals, then the day summary.
pub fn display_day(store: &NutritionStore, date: &str) {
    let day = store.day_data(date);

    println!();
    println!("=== {} ===", date);

    for slot in MealSlot::ALL {
        let entries = day.slot(slot);
        println!();
        if entries.is_empty() {
            println!("{}: (empty)", slot);
            continue;
        }

        let meal_macros = store.meal_total_macros(date, slot);
        println!(
            "{}: {} cal  {}",
            slot,
            store.meal_total_calories(date, slot),
            format_macros(&meal_macros)
        );
        for (index, entry) in entries.iter().enumerate() {
            entry_line(index, entry);
        }
    }

    println!();
    println!("--- Day total ---");
    println!(
        "{} cal  {}",
        store.day_total_calories(date),
        format_macros(&store.day_total_macros(date))
    );
    println!();
}

/// Display the product catalog as an aligned table, sorted by name.
pub fn display_products(store: &NutritionStore) {
    let products = store.products();
    if products.is_empty() {
        println!("Product catalog is empty. Add one with 'add-product'.");
        return;
    }

    let mut names: Vec<&String> = products.keys().collect();
    names.sort_unstable();

    let max_name_len = names.iter().map(|name| name.len()).max().unwrap_or(10);

    println!();
    println!("=== Products ({}) ===", names.len());
    println!();

    for name in names {
        let product = &products[name];
        let macros = format_macros(&MacroTotals {
            protein: product.protein,
            fat: product.fat,
            carbs: product.carbs,
        });

        let serving = match (product.serving_size, product.calories_per_serving) {
            (Some(size), Some(cal)) => format!("  serving: {} g / {} cal", size, cal),
            (Some(size), None) => format!("  serving: {} g", size),
            _ => String::new(),
        };

        println!(
            "  {:<width$} {:>5} cal/100g  {}{}",
            name,
            product.calories,
            macros,
            serving,
            width = max_name_len
        );
    }

    println!();
}
