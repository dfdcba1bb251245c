//! Plain-text rendering of session state for the terminal front end.

use crate::inventory::Inventory;
use crate::markup::instructions_text;
use crate::model::{RecipeDetail, RecipeSummary};

pub fn format_inventory(inventory: &Inventory) -> String {
    if inventory.is_empty() {
        return "No items yet. Add some ingredients to get started!".to_string();
    }

    let mut output = format!("Your Food Inventory ({} ingredients)\n", inventory.len());
    for item in inventory.items() {
        output.push_str(&format!("  - {}\n", item));
    }
    output
}

pub fn format_summary(recipe: &RecipeSummary) -> String {
    format!(
        "[{}] {} ({}/{} match, you have {}, you need {})",
        recipe.id,
        recipe.title,
        recipe.used_ingredient_count,
        recipe.total_ingredient_count(),
        recipe.used_ingredient_count,
        recipe.missed_ingredient_count
    )
}

pub fn format_results(recipes: &[RecipeSummary]) -> String {
    let mut output = format!("Found {} Recipes\n", recipes.len());
    for recipe in recipes {
        output.push_str(&format_summary(recipe));
        output.push('\n');
    }
    output
}

fn or_unknown(value: Option<u32>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

pub fn format_detail(recipe: &RecipeDetail) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", recipe.title));
    if let Some(image) = &recipe.image {
        output.push_str(&format!("{}\n", image));
    }
    output.push_str(&format!(
        "{} minutes | {} servings | {} ingredients\n",
        or_unknown(recipe.ready_in_minutes),
        or_unknown(recipe.servings),
        recipe.extended_ingredients.len()
    ));

    output.push_str("\nIngredients\n");
    for ingredient in &recipe.extended_ingredients {
        output.push_str(&format!("  - {}\n", ingredient.original));
    }

    output.push_str("\nInstructions\n");
    output.push_str(&instructions_text(recipe.instructions.as_deref()));
    output.push('\n');
    output
}
