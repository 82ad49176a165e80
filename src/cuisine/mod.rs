use crate::catalog::Catalog;
use crate::model::{Cuisine, Recipe};
use std::sync::Arc;

/// Returns the recipes tagged with a cuisine matching `name`.
///
/// A recipe matches when any of its cuisine tags contains `name` as a
/// case-insensitive substring, so `"ital"` selects recipes tagged `"Italian"`.
/// Results keep catalog order.
pub fn select_cuisine(catalog: &Catalog, name: &str) -> Vec<Arc<Recipe>> {
    let needle = name.to_lowercase();
    catalog
        .recipes()
        .iter()
        .filter(|recipe| {
            recipe
                .cuisines
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Looks up the display metadata of a cuisine by name, ignoring case.
pub fn find_cuisine<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Cuisine> {
    let wanted = name.to_lowercase();
    catalog
        .cuisines()
        .iter()
        .find(|cuisine| cuisine.name.to_lowercase() == wanted)
}
