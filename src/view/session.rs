use super::{DisplayMode, SearchTicket, ViewController, ViewState};
use crate::catalog::{Catalog, CatalogError};
use crate::config::DiscoveryConfig;
use crate::favorites::{FavoritesError, FavoritesStore, FileStorage, MemoryStorage, StorageError};
use crate::model::{Recipe, RecipeId};
use crate::search::SearchQuery;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    #[error("Failed to load catalog: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Failed to open storage: {0}")]
    StorageError(#[from] StorageError),
}

/// A recipe as the rendering layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeView {
    pub recipe: Arc<Recipe>,
    pub favorite: bool,
}

/// Read-only picture of the session for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub mode: DisplayMode,
    pub state: ViewState,
    /// Heading above the recipe list, `None` while loading
    pub heading: Option<String>,
    /// Recipes to render in the current mode
    pub recipes: Vec<RecipeView>,
}

/// One user's discovery session.
///
/// Owns the catalog, the favourites and the view state, and runs submitted
/// searches on a tokio runtime after a simulated delay. Only the most recent
/// search can commit; dropping the session cancels the pending one.
///
/// # Examples
///
/// ```
/// use recipe_quest::{Catalog, DiscoverySession, DisplayMode, FavoritesStore, SearchQuery};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = DiscoverySession::new(
///     Catalog::sample(),
///     FavoritesStore::in_memory(),
///     Duration::from_millis(10),
/// )?;
///
/// session.submit_search(SearchQuery::new(Default::default(), "pasta"));
/// session.wait_idle().await;
///
/// let snapshot = session.snapshot();
/// assert_eq!(snapshot.mode, DisplayMode::Results);
/// assert_eq!(snapshot.recipes[0].recipe.id, 1);
/// # Ok(())
/// # }
/// ```
pub struct DiscoverySession {
    catalog: Arc<Catalog>,
    favorites: Mutex<FavoritesStore>,
    controller: Arc<Mutex<ViewController>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    search_delay: Duration,
    runtime: Handle,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DiscoverySession {
    /// Creates a session on the current tokio runtime.
    pub fn new(
        catalog: Catalog,
        favorites: FavoritesStore,
        search_delay: Duration,
    ) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_handle(runtime, catalog, favorites, search_delay))
    }

    /// Creates a session whose searches run on `runtime`.
    pub fn with_handle(
        runtime: Handle,
        catalog: Catalog,
        favorites: FavoritesStore,
        search_delay: Duration,
    ) -> Self {
        DiscoverySession {
            catalog: Arc::new(catalog),
            favorites: Mutex::new(favorites),
            controller: Arc::new(Mutex::new(ViewController::new())),
            pending: Mutex::new(None),
            search_delay,
            runtime,
        }
    }

    /// Builds a session from configuration on the current tokio runtime.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        Self::from_config_with_handle(runtime, config)
    }

    pub fn from_config_with_handle(
        runtime: Handle,
        config: &DiscoveryConfig,
    ) -> Result<Self, SessionError> {
        let catalog = match &config.catalog_path {
            Some(path) if path.is_dir() => Catalog::load_dir(path)?,
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::sample(),
        };

        let favorites = match &config.storage_dir {
            Some(dir) => FavoritesStore::load(FileStorage::new(dir.clone())?, &config.favorites_key),
            None => FavoritesStore::load(MemoryStorage::new(), &config.favorites_key),
        };

        Ok(Self::with_handle(
            runtime,
            catalog,
            favorites,
            config.search_delay(),
        ))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Starts a search that commits after the configured delay.
    ///
    /// A newer search, a cuisine selection or dropping the session
    /// supersedes it. Returns `None` while a recipe is being viewed.
    pub fn submit_search(&self, query: SearchQuery) -> Option<SearchTicket> {
        // Held until the new task is stored, so tickets and handles stay in
        // the same order. Lock order is always pending, then controller.
        let mut pending = lock(&self.pending);
        let ticket = lock(&self.controller).begin_search()?;

        let catalog = Arc::clone(&self.catalog);
        let controller = Arc::downgrade(&self.controller);
        let delay = self.search_delay;

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let results = query.run(&catalog);

            let Some(controller) = controller.upgrade() else {
                debug!(request = ticket.request(), "Session gone, discarding search");
                return;
            };
            let count = results.len();
            if lock(&controller).complete_search(ticket, results) {
                info!(request = ticket.request(), results = count, "Search completed");
            }
        });

        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
        Some(ticket)
    }

    /// Waits until the pending search, if any, has finished.
    pub async fn wait_idle(&self) {
        let pending = lock(&self.pending).take();
        if let Some(task) = pending {
            // a cancelled task simply has nothing to commit
            let _ = task.await;
        }
    }

    pub fn select_cuisine(&self, name: &str) {
        lock(&self.controller).select_cuisine(&self.catalog, name);
    }

    pub fn clear_filter(&self) -> bool {
        lock(&self.controller).clear_filter()
    }

    /// Opens the recipe with `id`. Unknown ids are ignored.
    pub fn view_details(&self, id: RecipeId) -> bool {
        match self.catalog.get(id) {
            Some(recipe) => lock(&self.controller).view_details(Arc::clone(recipe)),
            None => {
                debug!(id, "No such recipe");
                false
            }
        }
    }

    pub fn back(&self) -> bool {
        lock(&self.controller).back()
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        lock(&self.favorites).is_favorite(id)
    }

    /// Flips the favourite state of a recipe; persisted before returning.
    pub fn toggle_favorite(&self, id: RecipeId) -> Result<bool, FavoritesError> {
        lock(&self.favorites).toggle(id)
    }

    pub fn favorite_ids(&self) -> Vec<RecipeId> {
        lock(&self.favorites).ids()
    }

    pub fn state(&self) -> ViewState {
        lock(&self.controller).state().clone()
    }

    pub fn display_mode(&self) -> DisplayMode {
        lock(&self.controller).display_mode()
    }

    /// Captures what to render right now.
    ///
    /// Favourite flags are read from the store at this moment.
    pub fn snapshot(&self) -> ViewSnapshot {
        let (mode, state) = {
            let controller = lock(&self.controller);
            (controller.display_mode(), controller.state().clone())
        };

        let (heading, recipes) = match (&mode, &state) {
            (DisplayMode::Loading, _) => (None, Vec::new()),
            (DisplayMode::Detail, ViewState::Detail { recipe, .. }) => {
                (Some(recipe.title.clone()), vec![Arc::clone(recipe)])
            }
            (DisplayMode::Results, ViewState::Results(results)) => {
                (Some(results.title()), results.recipes().to_vec())
            }
            _ => (Some("Featured Recipes".to_string()), self.catalog.featured()),
        };

        let favorites = lock(&self.favorites);
        let recipes = recipes
            .into_iter()
            .map(|recipe| RecipeView {
                favorite: favorites.is_favorite(recipe.id),
                recipe,
            })
            .collect();

        ViewSnapshot {
            mode,
            state,
            heading,
            recipes,
        }
    }
}

impl Drop for DiscoverySession {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.pending).take() {
            task.abort();
        }
    }
}
