use clap::Parser;
use chrono::{Local, NaiveDate};
use dialoguer::Input;

use calorie_log_rs::cli::{Cli, Command};
use calorie_log_rs::error::{CalError, Result};
use calorie_log_rs::export::{write_log_csv, write_products_csv};
use calorie_log_rs::interface::{
    display_day, display_products, prompt_amount, prompt_product_form, prompt_yes_no,
    resolve_product_name,
};
use calorie_log_rs::models::MealSlot;
use calorie_log_rs::store::NutritionStore;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Day { date } => cmd_day(&cli.file, date),
        Command::Products => cmd_products(&cli.file),
        Command::AddProduct => cmd_add_product(&cli.file),
        Command::EditProduct { name } => cmd_edit_product(&cli.file, &name),
        Command::RemoveProduct { name, yes } => cmd_remove_product(&cli.file, &name, yes),
        Command::Log {
            slot,
            product,
            amount,
            grams,
            date,
        } => cmd_log(&cli.file, slot, product, amount, grams, date),
        Command::EditEntry { slot, index, date } => cmd_edit_entry(&cli.file, slot, index, date),
        Command::Unlog { slot, index, date } => cmd_unlog(&cli.file, slot, index, date),
        Command::ExportProducts { out } => cmd_export_products(&cli.file, &out),
        Command::ExportLog { out } => cmd_export_log(&cli.file, &out),
    }
}

/// Resolve an optional date argument: today when omitted, validated
/// otherwise. The store treats dates as opaque keys, so bad input is
/// rejected here.
fn resolve_date(date: Option<String>) -> Result<String> {
    match date {
        None => Ok(Local::now().format("%Y-%m-%d").to_string()),
        Some(date) => {
            NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .map_err(|_| CalError::InvalidInput(format!("Invalid date: {}", date)))?;
            Ok(date)
        }
    }
}

/// Show the day report.
fn cmd_day(file_path: &str, date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let store = NutritionStore::open(file_path);
    display_day(&store, &date);
    Ok(())
}

/// List the product catalog.
fn cmd_products(file_path: &str) -> Result<()> {
    let store = NutritionStore::open(file_path);
    display_products(&store);
    Ok(())
}

/// Add a product to the catalog interactively.
fn cmd_add_product(file_path: &str) -> Result<()> {
    let mut store = NutritionStore::open(file_path);

    let (name, product) = prompt_product_form(None, None)?;

    if store.has_product(&name) {
        let overwrite = prompt_yes_no(&format!("'{}' already exists. Overwrite?", name), false)?;
        if !overwrite {
            println!("Nothing changed.");
            return Ok(());
        }
    }

    store.add_product(&name, product);
    store.save();

    let calories = store.product(&name).map(|p| p.calories).unwrap_or(0);
    println!("Added '{}' at {} cal/100g.", name, calories);
    Ok(())
}

/// Edit or rename a product; the store recomputes logged entries.
fn cmd_edit_product(file_path: &str, name: &str) -> Result<()> {
    let mut store = NutritionStore::open(file_path);

    let Some(current) = store.product(name).cloned() else {
        return Err(CalError::ProductNotFound(name.to_string()));
    };

    let (new_name, product) = prompt_product_form(Some(name), Some(&current))?;
    store.update_product(name, &new_name, product);
    store.save();

    if new_name != name {
        println!("Updated '{}' (renamed from '{}').", new_name, name);
    } else {
        println!("Updated '{}'.", new_name);
    }
    println!("Logged entries were recomputed against the new profile.");
    Ok(())
}

/// Remove a product and all entries logged against it.
fn cmd_remove_product(file_path: &str, name: &str, yes: bool) -> Result<()> {
    let mut store = NutritionStore::open(file_path);

    if !store.has_product(name) {
        return Err(CalError::ProductNotFound(name.to_string()));
    }

    if !yes {
        let confirm = prompt_yes_no(
            &format!(
                "Remove '{}' and every meal entry logged against it?",
                name
            ),
            false,
        )?;
        if !confirm {
            println!("Nothing changed.");
            return Ok(());
        }
    }

    store.remove_product(name);
    store.save();
    println!("Removed '{}'.", name);
    Ok(())
}

/// Log a meal entry for a date and slot.
fn cmd_log(
    file_path: &str,
    slot: MealSlot,
    product: Option<String>,
    amount: Option<f64>,
    grams: bool,
    date: Option<String>,
) -> Result<()> {
    let date = resolve_date(date)?;
    let mut store = NutritionStore::open(file_path);

    if store.products().is_empty() {
        return Err(CalError::EmptyCatalog);
    }

    let input = match product {
        Some(product) => product,
        None => Input::new()
            .with_prompt("Product name")
            .interact_text()?,
    };

    let Some(name) = resolve_product_name(&input, store.products())? else {
        return Err(CalError::ProductNotFound(input));
    };

    let (amount, is_grams) = match amount {
        Some(amount) if amount > 0.0 => (amount, grams),
        Some(amount) => {
            return Err(CalError::InvalidInput(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }
        None => prompt_amount()?,
    };

    store.add_meal_entry(&date, slot, &name, amount, is_grams);
    store.save();

    let day = store.day_data(&date);
    if let Some(entry) = day.slot(slot).last() {
        println!(
            "Logged {} for {} on {}: {} cal.",
            entry.product, slot, date, entry.calories
        );
    }
    Ok(())
}

/// Rewrite a logged entry in place.
fn cmd_edit_entry(
    file_path: &str,
    slot: MealSlot,
    index: usize,
    date: Option<String>,
) -> Result<()> {
    let date = resolve_date(date)?;
    let mut store = NutritionStore::open(file_path);

    let day = store.day_data(&date);
    let Some(entry) = day.slot(slot).get(index) else {
        return Err(CalError::InvalidInput(format!(
            "No entry at {} {} index {}",
            date, slot, index
        )));
    };

    println!(
        "Editing [{}] {} ({} {})",
        entry.time,
        entry.product,
        entry.amount,
        if entry.is_grams { "g" } else { "serv" }
    );

    let input: String = Input::new()
        .with_prompt("Product name")
        .default(entry.product.clone())
        .interact_text()?;

    let Some(name) = resolve_product_name(&input, store.products())? else {
        return Err(CalError::ProductNotFound(input));
    };

    let (amount, is_grams) = prompt_amount()?;

    store.update_meal_entry(&date, slot, index, &name, amount, is_grams);
    store.save();

    let day = store.day_data(&date);
    println!(
        "Entry updated: {} cal.",
        day.slot(slot)[index].calories
    );
    Ok(())
}

/// Remove a logged entry.
fn cmd_unlog(file_path: &str, slot: MealSlot, index: usize, date: Option<String>) -> Result<()> {
    let date = resolve_date(date)?;
    let mut store = NutritionStore::open(file_path);

    let day = store.day_data(&date);
    let Some(entry) = day.slot(slot).get(index) else {
        return Err(CalError::InvalidInput(format!(
            "No entry at {} {} index {}",
            date, slot, index
        )));
    };
    let removed = entry.product.clone();

    store.remove_meal_entry(&date, slot, index);
    store.save();

    println!("Removed {} from {} on {}.", removed, slot, date);
    Ok(())
}

/// Export the product catalog to CSV.
fn cmd_export_products(file_path: &str, out: &str) -> Result<()> {
    let store = NutritionStore::open(file_path);
    write_products_csv(&store, std::path::Path::new(out))?;
    println!("Wrote {} products to {}.", store.products().len(), out);
    Ok(())
}

/// Export the full meal log to CSV.
fn cmd_export_log(file_path: &str, out: &str) -> Result<()> {
    let store = NutritionStore::open(file_path);
    write_log_csv(&store, std::path::Path::new(out))?;
    println!("Wrote meal log for {} days to {}.", store.logged_dates().len(), out);
    Ok(())
}
