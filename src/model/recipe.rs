use super::markup::strip_markup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a recipe within a catalog.
pub type RecipeId = u64;

/// How demanding a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nutrition facts per serving.
///
/// Macronutrients are display strings carrying their unit suffix, e.g. `"18g"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A single recipe record of the catalog.
///
/// Recipes are plain data. Filtering always looks at the raw fields; the
/// `display_*` helpers exist for the rendering layer only.
///
/// # Examples
///
/// ```
/// use recipe_quest::Catalog;
///
/// let catalog = Catalog::sample();
/// let cake = catalog.get(3).unwrap();
/// assert_eq!(cake.title, "Decadent Chocolate Lava Cake");
/// assert_eq!(cake.steps().next(), Some((1, cake.instructions[0].as_str())));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    /// Opaque image reference (URI or asset name)
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    /// Average rating between 0 and 5
    pub rating: f64,
    /// Cuisine tags, never empty
    pub cuisines: Vec<String>,
    /// Short description, may embed markup
    pub summary: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    /// Steps in execution order
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
}

impl Recipe {
    /// Returns the summary with tag-like substrings removed.
    pub fn display_summary(&self) -> String {
        strip_markup(&self.summary)
    }

    /// Iterates over the instructions paired with their one-indexed step number.
    pub fn steps(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.instructions
            .iter()
            .enumerate()
            .map(|(idx, step)| (idx + 1, step.as_str()))
    }

    /// Cuisine tags shown on a recipe card (at most two).
    pub fn card_cuisines(&self) -> &[String] {
        let end = self.cuisines.len().min(2);
        &self.cuisines[..end]
    }

    /// Checks the record invariants, returning a description of the first violation.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.ready_in_minutes == 0 {
            return Err("preparation time must be positive".to_string());
        }
        if self.servings == 0 {
            return Err("servings must be positive".to_string());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("rating {} is outside 0..=5", self.rating));
        }
        if self.cuisines.is_empty() {
            return Err("at least one cuisine tag is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: 7,
            title: "Shakshuka".to_string(),
            image: "shakshuka.jpg".to_string(),
            ready_in_minutes: 30,
            servings: 2,
            rating: 4.5,
            cuisines: vec![
                "Middle Eastern".to_string(),
                "Breakfast".to_string(),
                "Vegetarian".to_string(),
            ],
            summary: "Eggs poached in a <b>spiced</b> tomato sauce.".to_string(),
            difficulty: Difficulty::Medium,
            ingredients: vec!["4 eggs".to_string(), "1 can tomatoes".to_string()],
            instructions: vec![
                "Simmer the tomatoes.".to_string(),
                "Crack in the eggs and cover.".to_string(),
            ],
            nutrition: Nutrition {
                calories: 310,
                protein: "17g".to_string(),
                carbs: "14g".to_string(),
                fat: "20g".to_string(),
            },
        }
    }

    #[test]
    fn test_display_summary_strips_tags() {
        let recipe = recipe();
        assert_eq!(
            recipe.display_summary(),
            "Eggs poached in a spiced tomato sauce."
        );
        // the raw summary is untouched
        assert!(recipe.summary.contains("<b>"));
    }

    #[test]
    fn test_steps_are_one_indexed() {
        let recipe = recipe();
        let steps: Vec<_> = recipe.steps().collect();
        assert_eq!(
            steps,
            vec![
                (1, "Simmer the tomatoes."),
                (2, "Crack in the eggs and cover.")
            ]
        );
    }

    #[test]
    fn test_card_cuisines_limited_to_two() {
        let mut recipe = recipe();
        assert_eq!(recipe.card_cuisines(), &["Middle Eastern", "Breakfast"]);

        recipe.cuisines.truncate(1);
        assert_eq!(recipe.card_cuisines(), &["Middle Eastern"]);
    }

    #[test]
    fn test_validate() {
        assert!(recipe().validate().is_ok());

        let mut bad = recipe();
        bad.rating = 5.5;
        assert!(bad.validate().unwrap_err().contains("rating"));

        let mut bad = recipe();
        bad.servings = 0;
        assert!(bad.validate().is_err());

        let mut bad = recipe();
        bad.ready_in_minutes = 0;
        assert!(bad.validate().is_err());

        let mut bad = recipe();
        bad.cuisines.clear();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_difficulty_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Hard).unwrap(),
            "\"Hard\""
        );
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
    }
}
