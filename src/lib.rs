uniffi::setup_scaffolding!();

pub mod catalog;
pub mod config;
pub mod cuisine;
pub mod favorites;
pub mod ffi;
pub mod model;
pub mod search;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, DiscoveryConfig};
pub use cuisine::{find_cuisine, select_cuisine};
pub use favorites::{FavoritesError, FavoritesStore, FileStorage, MemoryStorage, Storage, StorageError};
pub use model::*;
pub use search::{search, IngredientList, SearchQuery};
pub use view::{
    DiscoverySession, DisplayMode, RecipeView, ResultSet, SearchTicket, SessionError,
    ViewController, ViewSnapshot, ViewState,
};
