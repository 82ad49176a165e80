use serde::{Deserialize, Serialize};

/// Display metadata for a browsable cuisine.
///
/// The `name` doubles as the filter key handed to
/// [`select_cuisine`](crate::cuisine::select_cuisine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuisine {
    pub name: String,
    /// Flag or emoji shown next to the name
    #[serde(default)]
    pub flag: String,
    pub description: String,
    /// Representative dishes, in display order
    #[serde(default)]
    pub popular_dishes: Vec<String>,
    /// Display colour token
    pub color: String,
}

impl Cuisine {
    pub fn new(
        name: &str,
        flag: &str,
        description: &str,
        popular_dishes: &[&str],
        color: &str,
    ) -> Self {
        Cuisine {
            name: name.to_string(),
            flag: flag.to_string(),
            description: description.to_string(),
            popular_dishes: popular_dishes.iter().map(|d| d.to_string()).collect(),
            color: color.to_string(),
        }
    }
}
