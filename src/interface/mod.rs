pub mod prompts;
pub mod render;

pub use prompts::{prompt_amount, prompt_product_form, prompt_yes_no, resolve_product_name};
pub use render::{display_day, display_products, format_macros};
