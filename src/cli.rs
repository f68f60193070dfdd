use clap::{Parser, Subcommand};

use crate::models::MealSlot;
use crate::store::DEFAULT_FILE;

/// CalorieLog — a calorie and macro tracker over a product catalog and a per-day meal log.
#[derive(Parser, Debug)]
#[command(name = "calorie_log")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the calorie log JSON file.
    #[arg(short, long, default_value = DEFAULT_FILE)]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the day report with per-meal and day totals.
    Day {
        /// Date as YYYY-MM-DD; defaults to today.
        date: Option<String>,
    },

    /// List the product catalog.
    Products,

    /// Add a product to the catalog (interactive).
    AddProduct,

    /// Edit or rename a product; logged entries are recomputed.
    EditProduct {
        /// Current name of the product.
        name: String,
    },

    /// Remove a product and every entry logged against it.
    RemoveProduct {
        name: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Log a meal entry.
    Log {
        /// Which meal the entry belongs to.
        slot: MealSlot,

        /// Product name; prompted for when omitted.
        product: Option<String>,

        /// Amount consumed; prompted for when omitted.
        #[arg(short, long)]
        amount: Option<f64>,

        /// Treat the amount as grams instead of serving multiples.
        #[arg(short, long)]
        grams: bool,

        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Rewrite a logged entry (interactive).
    EditEntry {
        slot: MealSlot,

        /// Position of the entry within the meal, as shown by 'day'.
        index: usize,

        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Remove a logged entry.
    Unlog {
        slot: MealSlot,

        /// Position of the entry within the meal, as shown by 'day'.
        index: usize,

        /// Date as YYYY-MM-DD; defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Export the product catalog to CSV.
    ExportProducts {
        /// Output file path.
        out: String,
    },

    /// Export the full meal log to CSV.
    ExportLog {
        /// Output file path.
        out: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Day { date: None }
    }
}
