use crate::controller::SearchState;
use crate::model::{RecipeDetail, RecipeSummary, QUICK_INGREDIENTS};
use std::fmt::Write;

/// Render the result list, or the message/placeholder for the current state
pub fn render_search_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => {
            "Ready to cook? Search for an ingredient to discover recipes.".to_string()
        }
        SearchState::Loading => "Searching...".to_string(),
        SearchState::Success(recipes) => render_results(recipes),
        SearchState::Empty | SearchState::Failed(_) => {
            state.message().unwrap_or_default().to_string()
        }
    }
}

fn render_results(recipes: &[RecipeSummary]) -> String {
    let mut out = format!("Found {} recipes:\n", recipes.len());
    for (i, recipe) in recipes.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} [{}]", i + 1, recipe.name, recipe.id);
    }
    out
}

/// Render the full recipe view
pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.name);
    let _ = writeln!(out, "{}", "=".repeat(detail.name.chars().count()));
    let _ = writeln!(out, "{} • {}", detail.category, detail.area);
    if !detail.thumbnail_url.is_empty() {
        let _ = writeln!(out, "Image: {}", detail.thumbnail_url);
    }

    let _ = writeln!(out, "\nIngredients:");
    for line in &detail.ingredients {
        let _ = writeln!(out, "  - {}", line);
    }

    let _ = writeln!(out, "\nInstructions:");
    let _ = writeln!(out, "{}", detail.instructions.trim_end());

    if let Some(video) = &detail.video_url {
        let _ = writeln!(out, "\nVideo: {}", video);
    }
    out
}

pub fn render_quick_ingredients() -> String {
    format!("Quick ingredient search: {}", QUICK_INGREDIENTS.join(", "))
}
