//! Plain data types shared by every other module.

mod cuisine;
mod markup;
mod recipe;

pub use cuisine::Cuisine;
pub use markup::strip_markup;
pub use recipe::{Difficulty, Nutrition, Recipe, RecipeId};
