use crate::catalog::Catalog;
use crate::model::Recipe;
use std::sync::Arc;

mod model;

pub use model::{IngredientList, SearchQuery};

/// Filters the catalog by free text and ingredients.
///
/// - A non-empty `term` keeps recipes whose title or summary contains it
///   (case-insensitive).
/// - Non-empty `ingredients` keeps recipes where any requested ingredient is
///   contained in any of the recipe's ingredient lines (case-insensitive).
/// - Both filters combine with AND; the term filter runs first.
/// - With neither a term nor ingredients the result is empty: there is no
///   active query.
///
/// Results keep catalog order.
///
/// # Examples
///
/// ```
/// use recipe_quest::{search, Catalog};
///
/// let catalog = Catalog::sample();
/// let results = search(&catalog, &["soy sauce"], "");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].title, "Asian Vegetable Stir-Fry");
/// ```
pub fn search<S: AsRef<str>>(catalog: &Catalog, ingredients: &[S], term: &str) -> Vec<Arc<Recipe>> {
    if term.is_empty() && ingredients.is_empty() {
        return Vec::new();
    }

    let term_lower = term.to_lowercase();
    let wanted: Vec<String> = ingredients
        .iter()
        .map(|i| i.as_ref().to_lowercase())
        .collect();

    catalog
        .recipes()
        .iter()
        .filter(|recipe| term_lower.is_empty() || matches_term(recipe, &term_lower))
        .filter(|recipe| wanted.is_empty() || matches_any_ingredient(recipe, &wanted))
        .cloned()
        .collect()
}

/// Title or raw summary contains the (lower-cased) term
fn matches_term(recipe: &Recipe, term_lower: &str) -> bool {
    recipe.title.to_lowercase().contains(term_lower)
        || recipe.summary.to_lowercase().contains(term_lower)
}

/// Any wanted ingredient is a substring of any ingredient line
fn matches_any_ingredient(recipe: &Recipe, wanted: &[String]) -> bool {
    let lines: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|line| line.to_lowercase())
        .collect();

    wanted
        .iter()
        .any(|ingredient| lines.iter().any(|line| line.contains(ingredient.as_str())))
}
