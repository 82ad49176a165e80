use crate::catalog::Catalog;
use crate::model::Recipe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Normalised list of ingredients the user is searching by.
///
/// Entries are trimmed and lower-cased on the way in; empty and duplicate
/// entries are rejected. Insertion order is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient, returning `false` if it was empty or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || self.items.contains(&normalized) {
            return false;
        }
        self.items.push(normalized);
        true
    }

    /// Removes an ingredient, returning `false` if it was not present.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != ingredient);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IngredientList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = IngredientList::new();
        for item in iter {
            list.add(item.as_ref());
        }
        list
    }
}

/// A complete search request: free text plus ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub ingredients: IngredientList,
    pub term: String,
}

impl SearchQuery {
    pub fn new(ingredients: IngredientList, term: impl Into<String>) -> Self {
        SearchQuery {
            ingredients,
            term: term.into(),
        }
    }

    /// True when neither a term nor any ingredient is set.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.ingredients.is_empty()
    }

    pub fn run(&self, catalog: &Catalog) -> Vec<Arc<Recipe>> {
        super::search(catalog, self.ingredients.as_slice(), &self.term)
    }
}
