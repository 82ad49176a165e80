//! UniFFI bindings for native front-ends (iOS, Android).
//!
//! This module exposes the discovery session and the catalog through
//! FFI-safe records. Shared records are flattened into plain copies and
//! every error collapses into [`RecipeQuestError`].

use crate::catalog::{Catalog, CatalogError};
use crate::config::{ConfigError, DiscoveryConfig};
use crate::favorites::{FavoritesError, StorageError};
use crate::model::{strip_markup as strip_markup_internal, Cuisine, Recipe};
use crate::search::{search as search_internal, IngredientList, SearchQuery};
use crate::view::{DiscoverySession, DisplayMode, SessionError, ViewSnapshot, ViewState};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeQuestError {
    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("Runtime error: {message}")]
    RuntimeError { message: String },
}

impl From<CatalogError> for RecipeQuestError {
    fn from(e: CatalogError) -> Self {
        RecipeQuestError::CatalogError {
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for RecipeQuestError {
    fn from(e: StorageError) -> Self {
        RecipeQuestError::StorageError {
            message: e.to_string(),
        }
    }
}

impl From<FavoritesError> for RecipeQuestError {
    fn from(e: FavoritesError) -> Self {
        match e {
            FavoritesError::StorageError(e) => e.into(),
            FavoritesError::EncodeError(e) => RecipeQuestError::StorageError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for RecipeQuestError {
    fn from(e: ConfigError) -> Self {
        RecipeQuestError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<SessionError> for RecipeQuestError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::CatalogError(e) => e.into(),
            SessionError::StorageError(e) => e.into(),
            SessionError::NoRuntime(e) => RecipeQuestError::RuntimeError {
                message: e.to_string(),
            },
        }
    }
}

/// Nutrition facts per serving.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNutrition {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub rating: f64,
    pub cuisines: Vec<String>,
    /// Summary with markup already removed
    pub summary: String,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: FfiNutrition,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id,
            title: r.title.clone(),
            image: r.image.clone(),
            ready_in_minutes: r.ready_in_minutes,
            servings: r.servings,
            rating: r.rating,
            cuisines: r.cuisines.clone(),
            summary: r.display_summary(),
            difficulty: r.difficulty.to_string(),
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            nutrition: FfiNutrition {
                calories: r.nutrition.calories,
                protein: r.nutrition.protein.clone(),
                carbs: r.nutrition.carbs.clone(),
                fat: r.nutrition.fat.clone(),
            },
        }
    }
}

/// A recipe together with its favourite flag.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipeView {
    pub recipe: FfiRecipe,
    pub favorite: bool,
}

/// FFI-safe representation of a cuisine.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCuisine {
    pub name: String,
    pub flag: String,
    pub description: String,
    pub popular_dishes: Vec<String>,
    pub color: String,
}

impl From<&Cuisine> for FfiCuisine {
    fn from(c: &Cuisine) -> Self {
        FfiCuisine {
            name: c.name.clone(),
            flag: c.flag.clone(),
            description: c.description.clone(),
            popular_dishes: c.popular_dishes.clone(),
            color: c.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDisplayMode {
    Browse,
    Loading,
    Results,
    Detail,
}

impl From<DisplayMode> for FfiDisplayMode {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Browse => FfiDisplayMode::Browse,
            DisplayMode::Loading => FfiDisplayMode::Loading,
            DisplayMode::Results => FfiDisplayMode::Results,
            DisplayMode::Detail => FfiDisplayMode::Detail,
        }
    }
}

/// What the native screen should render.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSnapshot {
    pub mode: FfiDisplayMode,
    pub heading: Option<String>,
    /// Active cuisine filter of the shown (or remembered) result list
    pub cuisine_filter: Option<String>,
    pub recipes: Vec<FfiRecipeView>,
}

impl From<ViewSnapshot> for FfiSnapshot {
    fn from(s: ViewSnapshot) -> Self {
        let results = match &s.state {
            ViewState::Results(results) => Some(results),
            ViewState::Detail { previous, .. } => match &**previous {
                ViewState::Results(results) => Some(results),
                _ => None,
            },
            _ => None,
        };

        FfiSnapshot {
            mode: s.mode.into(),
            heading: s.heading,
            cuisine_filter: results.and_then(|r| r.cuisine().map(str::to_string)),
            recipes: s
                .recipes
                .iter()
                .map(|view| FfiRecipeView {
                    recipe: FfiRecipe::from(view.recipe.as_ref()),
                    favorite: view.favorite,
                })
                .collect(),
        }
    }
}

/// A discovery session with its own runtime for simulated search latency.
#[derive(uniffi::Object)]
pub struct FfiDiscovery {
    // dropped before the runtime so the pending search is aborted first
    session: DiscoverySession,
    runtime: Runtime,
}

#[uniffi::export]
impl FfiDiscovery {
    /// Creates a session from an optional YAML configuration document.
    #[uniffi::constructor]
    pub fn new(config_yaml: Option<String>) -> Result<Arc<Self>, RecipeQuestError> {
        let config = match config_yaml {
            Some(yaml) => DiscoveryConfig::from_yaml_str(&yaml)?,
            None => DiscoveryConfig::default(),
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .map_err(|e| RecipeQuestError::RuntimeError {
                message: e.to_string(),
            })?;
        let session = DiscoverySession::from_config_with_handle(runtime.handle().clone(), &config)?;

        Ok(Arc::new(FfiDiscovery { session, runtime }))
    }

    /// Starts a search; returns false if a recipe is open.
    pub fn submit_search(&self, ingredients: Vec<String>, term: String) -> bool {
        let ingredients: IngredientList = ingredients.iter().collect();
        self.session
            .submit_search(SearchQuery::new(ingredients, term))
            .is_some()
    }

    /// Blocks until the pending search has finished.
    pub fn wait_idle(&self) {
        self.runtime.block_on(self.session.wait_idle());
    }

    pub fn select_cuisine(&self, name: String) {
        self.session.select_cuisine(&name);
    }

    pub fn clear_filter(&self) -> bool {
        self.session.clear_filter()
    }

    pub fn view_details(&self, id: u64) -> bool {
        self.session.view_details(id)
    }

    pub fn back(&self) -> bool {
        self.session.back()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.session.is_favorite(id)
    }

    pub fn toggle_favorite(&self, id: u64) -> Result<bool, RecipeQuestError> {
        Ok(self.session.toggle_favorite(id)?)
    }

    pub fn favorite_ids(&self) -> Vec<u64> {
        self.session.favorite_ids()
    }

    pub fn cuisines(&self) -> Vec<FfiCuisine> {
        self.session
            .catalog()
            .cuisines()
            .iter()
            .map(FfiCuisine::from)
            .collect()
    }

    pub fn snapshot(&self) -> FfiSnapshot {
        self.session.snapshot().into()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Returns every recipe of the built-in sample catalog.
#[uniffi::export]
pub fn sample_recipes() -> Vec<FfiRecipe> {
    Catalog::sample()
        .recipes()
        .iter()
        .map(|r| FfiRecipe::from(r.as_ref()))
        .collect()
}

/// Runs a search against the built-in sample catalog, without delay.
#[uniffi::export]
pub fn search_sample(ingredients: Vec<String>, term: String) -> Vec<FfiRecipe> {
    let ingredients: IngredientList = ingredients.iter().collect();
    search_internal(&Catalog::sample(), ingredients.as_slice(), &term)
        .iter()
        .map(|r| FfiRecipe::from(r.as_ref()))
        .collect()
}

/// Removes tag-like markup from display text.
#[uniffi::export]
pub fn strip_markup(text: String) -> String {
    strip_markup_internal(&text)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::formatdoc;
    use tempfile::TempDir;

    #[test]
    fn test_sample_recipes() {
        let recipes = sample_recipes();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[2].difficulty, "Medium");
        assert_eq!(recipes[0].nutrition.protein, "18g");
    }

    #[test]
    fn test_search_sample_normalizes_ingredients() {
        let results = search_sample(vec!["  SOY Sauce ".to_string()], String::new());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Asian Vegetable Stir-Fry");

        assert!(search_sample(Vec::new(), String::new()).is_empty());
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<b>Hot</b> soup".to_string()), "Hot soup");
    }

    #[test]
    fn test_discovery_flow() {
        let discovery = FfiDiscovery::new(Some("search_delay_ms: 1".to_string())).unwrap();
        assert_eq!(discovery.cuisines().len(), 6);
        assert_eq!(discovery.snapshot().mode, FfiDisplayMode::Browse);

        assert!(discovery.submit_search(Vec::new(), "chocolate".to_string()));
        discovery.wait_idle();
        let snapshot = discovery.snapshot();
        assert_eq!(snapshot.mode, FfiDisplayMode::Results);
        assert_eq!(snapshot.heading.as_deref(), Some("Search Results"));
        assert_eq!(snapshot.recipes[0].recipe.id, 3);

        discovery.select_cuisine("Italian".to_string());
        assert!(discovery.view_details(1));
        let snapshot = discovery.snapshot();
        assert_eq!(snapshot.mode, FfiDisplayMode::Detail);
        assert_eq!(snapshot.cuisine_filter.as_deref(), Some("Italian"));

        assert!(discovery.toggle_favorite(1).unwrap());
        assert!(discovery.snapshot().recipes[0].favorite);

        assert!(discovery.back());
        assert!(discovery.clear_filter());
        assert_eq!(discovery.snapshot().mode, FfiDisplayMode::Browse);
        assert_eq!(discovery.favorite_ids(), vec![1]);
    }

    #[test]
    fn test_discovery_persists_favorites() {
        let temp_dir = TempDir::new().unwrap();
        let config = formatdoc! {"
            search_delay_ms: 1
            storage_dir: {}
        ", temp_dir.path().display()};

        let discovery = FfiDiscovery::new(Some(config.clone())).unwrap();
        discovery.toggle_favorite(2).unwrap();
        drop(discovery);

        let reopened = FfiDiscovery::new(Some(config)).unwrap();
        assert!(reopened.is_favorite(2));
    }

    #[test]
    fn test_invalid_config() {
        let result = FfiDiscovery::new(Some("search_delay_ms: [".to_string()));
        assert!(matches!(result, Err(RecipeQuestError::ConfigError { .. })));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
