use std::collections::HashMap;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CalError, Result};
use crate::models::Product;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_u32(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| CalError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for an optional integer; empty input means "unknown".
fn prompt_optional_u32(prompt: &str, default: Option<u32>) -> Result<Option<u32>> {
    let mut input = Input::new()
        .with_prompt(format!("{} (blank = unknown)", prompt))
        .allow_empty(true);

    if let Some(value) = default {
        input = input.default(value.to_string());
    }

    let text: String = input.interact_text()?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    text.parse()
        .map(Some)
        .map_err(|_| CalError::InvalidInput(format!("Invalid number: {}", text)))
}

/// Collect a full product profile, prefilled from `current` when
/// editing.
pub fn prompt_product_form(
    name_default: Option<&str>,
    current: Option<&Product>,
) -> Result<(String, Product)> {
    let mut name_input = Input::new().with_prompt("Product name");
    if let Some(name) = name_default {
        name_input = name_input.default(name.to_string());
    }
    let name: String = name_input.interact_text()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(CalError::InvalidInput("Product name is empty".to_string()));
    }

    let calories = prompt_u32(
        "Calories per 100 g (0 to derive from serving data)",
        current.map(|p| p.calories).unwrap_or(0),
    )?;
    let protein = prompt_optional_u32("Protein per 100 g", current.and_then(|p| p.protein))?;
    let fat = prompt_optional_u32("Fat per 100 g", current.and_then(|p| p.fat))?;
    let carbs = prompt_optional_u32("Carbs per 100 g", current.and_then(|p| p.carbs))?;
    let serving_size =
        prompt_optional_u32("Serving size in grams", current.and_then(|p| p.serving_size))?;
    let calories_per_serving = prompt_optional_u32(
        "Calories per serving",
        current.and_then(|p| p.calories_per_serving),
    )?;

    if calories == 0 && (serving_size.unwrap_or(0) == 0 || calories_per_serving.unwrap_or(0) == 0) {
        return Err(CalError::InvalidInput(
            "Give calories per 100 g, or both serving size and calories per serving".to_string(),
        ));
    }

    let product = Product {
        calories,
        protein,
        fat,
        carbs,
        serving_size,
        calories_per_serving,
    };
    Ok((name, product))
}

/// Prompt for an entry amount and its mode.
pub fn prompt_amount() -> Result<(f64, bool)> {
    let input: String = Input::new()
        .with_prompt("Amount")
        .default("1".to_string())
        .interact_text()?;

    let amount: f64 = input
        .parse()
        .map_err(|_| CalError::InvalidInput(format!("Invalid amount: {}", input)))?;

    if amount <= 0.0 {
        return Err(CalError::InvalidInput(
            "Amount must be positive".to_string(),
        ));
    }

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&["grams", "servings"])
        .default(0)
        .interact()?;

    Ok((amount, selection == 0))
}

/// Resolve user input to a catalog product name.
///
/// Tries an exact case-insensitive match first, then fuzzy matching
/// with confirmation. Returns `None` when nothing matched or the user
/// rejected every candidate.
pub fn resolve_product_name(
    input: &str,
    products: &HashMap<String, Product>,
) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let exact = products
        .keys()
        .find(|name| name.to_lowercase() == input.to_lowercase());
    if let Some(name) = exact {
        return Ok(Some(name.clone()));
    }

    let mut candidates: Vec<(&String, f64)> = products
        .keys()
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| name.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(name, _)| (*name).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}
