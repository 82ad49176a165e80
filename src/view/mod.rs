//! View state of the discovery screen.
//!
//! [`ViewController`] is a synchronous state machine over [`ViewState`];
//! every transition goes through a named action. Searches are split into
//! [`ViewController::begin_search`] and [`ViewController::complete_search`]
//! so the caller can put latency between the two. [`DiscoverySession`] does
//! that on a tokio runtime.

use crate::catalog::Catalog;
use crate::cuisine;
use crate::model::Recipe;
use std::sync::Arc;
use tracing::debug;

mod session;

pub use session::{DiscoverySession, RecipeView, SessionError, ViewSnapshot};

/// Identifies one submitted search.
///
/// Only the ticket of the most recent search may commit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn request(&self) -> u64 {
        self.0
    }
}

/// A list of recipes being shown, optionally produced by a cuisine filter.
///
/// Cloning shares the underlying list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    recipes: Arc<[Arc<Recipe>]>,
    cuisine: Option<String>,
}

impl ResultSet {
    pub fn new(recipes: Vec<Arc<Recipe>>, cuisine: Option<String>) -> Self {
        ResultSet {
            recipes: recipes.into(),
            cuisine,
        }
    }

    pub fn recipes(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    /// The active cuisine filter, if the list came from one.
    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    /// Heading shown above the list.
    pub fn title(&self) -> String {
        match &self.cuisine {
            Some(cuisine) => format!("{cuisine} Recipes"),
            None => "Search Results".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// True if both sets share the very same list allocation.
    pub fn same_list(&self, other: &ResultSet) -> bool {
        Arc::ptr_eq(&self.recipes, &other.recipes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Cuisine explorer and featured recipes
    Browsing,
    /// A search is pending
    Searching { request: u64 },
    Results(ResultSet),
    /// A single recipe; `previous` is what `back` returns to and is never
    /// itself a `Detail`
    Detail {
        recipe: Arc<Recipe>,
        previous: Box<ViewState>,
    },
}

/// Which collaborator renders the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Browse,
    Loading,
    Results,
    Detail,
}

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    latest_request: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    pub fn new() -> Self {
        ViewController {
            state: ViewState::Browsing,
            latest_request: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn display_mode(&self) -> DisplayMode {
        match &self.state {
            ViewState::Browsing => DisplayMode::Browse,
            ViewState::Searching { .. } => DisplayMode::Loading,
            // an unfiltered search without hits falls back to the browse page
            ViewState::Results(results) if results.is_empty() && results.cuisine().is_none() => {
                DisplayMode::Browse
            }
            ViewState::Results(_) => DisplayMode::Results,
            ViewState::Detail { .. } => DisplayMode::Detail,
        }
    }

    /// Enters `Searching` and hands out the ticket that may commit its results.
    ///
    /// Any earlier ticket becomes stale. Returns `None` while a recipe is
    /// being viewed.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if matches!(self.state, ViewState::Detail { .. }) {
            debug!("Ignoring search while viewing a recipe");
            return None;
        }

        self.latest_request += 1;
        self.state = ViewState::Searching {
            request: self.latest_request,
        };
        debug!(request = self.latest_request, "Search started");
        Some(SearchTicket(self.latest_request))
    }

    /// Commits the results of a search.
    ///
    /// Applies only if `ticket` is the most recent search and the controller
    /// is still waiting for it, either directly or underneath an open recipe.
    /// Returns whether the results were committed.
    pub fn complete_search(&mut self, ticket: SearchTicket, recipes: Vec<Arc<Recipe>>) -> bool {
        if ticket.0 != self.latest_request {
            debug!(request = ticket.0, latest = self.latest_request, "Dropping stale search");
            return false;
        }

        let slot = match &mut self.state {
            ViewState::Detail { previous, .. } => &mut **previous,
            state => state,
        };
        if !matches!(*slot, ViewState::Searching { request } if request == ticket.0) {
            debug!(request = ticket.0, "Search superseded before completion");
            return false;
        }

        *slot = ViewState::Results(ResultSet::new(recipes, None));
        true
    }

    /// Shows the recipes of a cuisine. Allowed from any state.
    pub fn select_cuisine(&mut self, catalog: &Catalog, name: &str) {
        let recipes = cuisine::select_cuisine(catalog, name);
        debug!(cuisine = name, count = recipes.len(), "Cuisine selected");
        self.state = ViewState::Results(ResultSet::new(recipes, Some(name.to_string())));
    }

    /// Leaves a result list for the browse page.
    pub fn clear_filter(&mut self) -> bool {
        if !matches!(self.state, ViewState::Results(_)) {
            debug!("No results to clear");
            return false;
        }
        self.state = ViewState::Browsing;
        true
    }

    /// Opens a recipe, remembering the current state for [`back`](Self::back).
    pub fn view_details(&mut self, recipe: Arc<Recipe>) -> bool {
        if matches!(self.state, ViewState::Detail { .. }) {
            debug!(id = recipe.id, "Already viewing a recipe");
            return false;
        }

        let previous = std::mem::replace(&mut self.state, ViewState::Browsing);
        self.state = ViewState::Detail {
            recipe,
            previous: Box::new(previous),
        };
        true
    }

    /// Returns from a recipe to exactly the state it was opened from.
    pub fn back(&mut self) -> bool {
        match std::mem::replace(&mut self.state, ViewState::Browsing) {
            ViewState::Detail { previous, .. } => {
                self.state = *previous;
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }
}
