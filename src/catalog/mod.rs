//! The recipe catalog.
//!
//! A [`Catalog`] is the immutable collection of every known recipe plus the
//! browsable cuisines. It is built once (from the built-in sample data, a
//! YAML document, or a directory of YAML recipe files) and never mutated
//! afterwards. The search engine and the cuisine index only ever see a
//! `&Catalog`, so they do not care where the data came from.

use crate::model::{Cuisine, Recipe, RecipeId};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

mod sample;

/// Errors that can occur while building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(RecipeId),

    #[error("Duplicate cuisine: {0}")]
    DuplicateCuisine(String),

    #[error("Invalid recipe {id}: {reason}")]
    InvalidRecipe { id: RecipeId, reason: String },

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),
}

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
    #[serde(default)]
    cuisines: Option<Vec<Cuisine>>,
}

/// Immutable collection of recipes and cuisines.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
    cuisines: Vec<Cuisine>,
}

impl Catalog {
    /// Builds a catalog, validating every recipe and rejecting duplicate ids
    /// and duplicate cuisine names.
    pub fn new(recipes: Vec<Recipe>, cuisines: Vec<Cuisine>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        for recipe in &recipes {
            recipe
                .validate()
                .map_err(|reason| CatalogError::InvalidRecipe {
                    id: recipe.id,
                    reason,
                })?;
            if !seen_ids.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }

        let mut seen_names = HashSet::new();
        for cuisine in &cuisines {
            if !seen_names.insert(cuisine.name.as_str()) {
                return Err(CatalogError::DuplicateCuisine(cuisine.name.clone()));
            }
        }

        Ok(Catalog {
            recipes: recipes.into_iter().map(Arc::new).collect(),
            cuisines,
        })
    }

    /// The built-in demo catalog: three recipes and six cuisines.
    pub fn sample() -> Self {
        Catalog {
            recipes: sample::recipes().into_iter().map(Arc::new).collect(),
            cuisines: sample::cuisines(),
        }
    }

    /// Parses a YAML catalog document of the form `{ recipes: [...], cuisines: [...] }`.
    ///
    /// When `cuisines` is absent the six default cuisines are used.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        let cuisines = file.cuisines.unwrap_or_else(sample::cuisines);
        Catalog::new(file.recipes, cuisines)
    }

    /// Reads a YAML catalog document from disk.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Catalog::from_yaml_str(&content)?;
        info!(path = %path, recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Loads every `*.yaml` file below `base_dir` as a single recipe.
    ///
    /// Files are read in sorted path order, which becomes the catalog order.
    /// The default cuisines are attached.
    pub fn load_dir(base_dir: &Utf8Path) -> Result<Self, CatalogError> {
        if !base_dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(base_dir.to_path_buf()));
        }

        let pattern = base_dir.join("**/*.yaml");
        let mut paths = Vec::new();
        for entry in glob::glob(pattern.as_str())? {
            let path = entry?;
            let path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| CatalogError::InvalidPath(p.display().to_string()))?;
            paths.push(path);
        }
        paths.sort();

        let mut recipes = Vec::with_capacity(paths.len());
        for path in &paths {
            let content = fs::read_to_string(path)?;
            recipes.push(serde_yaml::from_str::<Recipe>(&content)?);
        }

        let catalog = Catalog::new(recipes, sample::cuisines())?;
        info!(dir = %base_dir, recipes = catalog.len(), "Loaded recipe directory");
        Ok(catalog)
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    /// All browsable cuisines in display order.
    pub fn cuisines(&self) -> &[Cuisine] {
        &self.cuisines
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: RecipeId) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes shown on the browse page.
    pub fn featured(&self) -> Vec<Arc<Recipe>> {
        self.recipes.clone()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    const SOUP: &str = indoc! {r#"
        id: 10
        title: Tomato Soup
        image: soup.jpg
        ready_in_minutes: 40
        servings: 4
        rating: 4.2
        cuisines: [Italian, Vegetarian]
        summary: Velvety <em>roasted</em> tomato soup.
        difficulty: Easy
        ingredients:
          - 1 kg tomatoes
          - 1 onion
        instructions:
          - Roast the tomatoes.
          - Blend with the onion.
        nutrition:
          calories: 150
          protein: 4g
          carbs: 20g
          fat: 6g
    "#};

    const CURRY: &str = indoc! {r#"
        id: 11
        title: Chickpea Curry
        image: curry.jpg
        ready_in_minutes: 35
        servings: 4
        rating: 4.7
        cuisines: [Indian]
        summary: Warming chickpea curry.
        difficulty: Medium
        ingredients:
          - 2 cans chickpeas
          - 1 tbsp garam masala
        instructions:
          - Fry the spices.
          - Simmer the chickpeas.
        nutrition:
          calories: 420
          protein: 15g
          carbs: 55g
          fat: 14g
    "#};

    fn utf8_dir(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let sample = Catalog::sample();
        let rebuilt = Catalog::new(
            sample.recipes().iter().map(|r| (**r).clone()).collect(),
            sample.cuisines().to_vec(),
        )
        .unwrap();

        assert_eq!(rebuilt.len(), 3);
        let names: Vec<&str> = rebuilt.cuisines().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Italian", "Asian", "Mexican", "French", "Indian", "Middle Eastern"]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let sample = Catalog::sample();
        let mut recipes: Vec<Recipe> = sample.recipes().iter().map(|r| (**r).clone()).collect();
        recipes[2].id = 1;

        let result = Catalog::new(recipes, Vec::new());
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_duplicate_cuisine_rejected() {
        let mut cuisines = sample::cuisines();
        cuisines.push(cuisines[0].clone());

        let result = Catalog::new(Vec::new(), cuisines);
        assert!(matches!(result, Err(CatalogError::DuplicateCuisine(name)) if name == "Italian"));
    }

    #[test]
    fn test_invalid_recipe_rejected() {
        let mut recipe = sample::recipes().remove(0);
        recipe.rating = -1.0;

        let result = Catalog::new(vec![recipe], Vec::new());
        assert!(matches!(result, Err(CatalogError::InvalidRecipe { id: 1, .. })));
    }

    #[test]
    fn test_get_and_featured() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.get(2).unwrap().title, "Asian Vegetable Stir-Fry");
        assert!(catalog.get(99).is_none());

        let featured: Vec<RecipeId> = catalog.featured().iter().map(|r| r.id).collect();
        assert_eq!(featured, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_yaml_str_defaults_cuisines() {
        let yaml = format!("recipes:\n{}", indent_as_list_item(SOUP));
        let catalog = Catalog::from_yaml_str(&yaml).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recipes()[0].title, "Tomato Soup");
        assert_eq!(catalog.cuisines().len(), 6);
    }

    #[test]
    fn test_from_yaml_str_with_cuisines() {
        let yaml = indoc! {r#"
            recipes: []
            cuisines:
              - name: Nordic
                description: Smoked fish and rye
                color: teal
        "#};
        let catalog = Catalog::from_yaml_str(yaml).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.cuisines().len(), 1);
        assert_eq!(catalog.cuisines()[0].name, "Nordic");
        assert!(catalog.cuisines()[0].popular_dishes.is_empty());
    }

    #[test]
    fn test_from_yaml_str_malformed() {
        let result = Catalog::from_yaml_str("recipes: [ {id: nope} ]");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = utf8_dir(&temp_dir).join("catalog.yaml");
        fs::write(&path, format!("recipes:\n{}", indent_as_list_item(CURRY))).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.get(11).unwrap().title, "Chickpea Curry");
    }

    #[test]
    fn test_load_dir_sorted_and_nested() {
        let temp_dir = TempDir::new().unwrap();
        let dir = utf8_dir(&temp_dir);
        let nested = dir.join("mains");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.join("b_soup.yaml"), SOUP).unwrap();
        fs::write(nested.join("curry.yaml"), CURRY).unwrap();
        fs::write(dir.join("notes.txt"), "not a recipe").unwrap();

        let catalog = Catalog::load_dir(&dir).unwrap();
        let ids: Vec<RecipeId> = catalog.recipes().iter().map(|r| r.id).collect();
        // "b_soup.yaml" sorts before "mains/curry.yaml"
        assert_eq!(ids, vec![10, 11]);
        assert_eq!(catalog.cuisines().len(), 6);
    }

    #[test]
    fn test_load_dir_missing() {
        let result = Catalog::load_dir(Utf8Path::new("/nonexistent/recipes"));
        assert!(matches!(result, Err(CatalogError::DirectoryNotFound(_))));
    }

    fn indent_as_list_item(recipe: &str) -> String {
        let mut out = String::new();
        for (idx, line) in recipe.lines().enumerate() {
            if idx == 0 {
                out.push_str("  - ");
            } else {
                out.push_str("    ");
            }
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
