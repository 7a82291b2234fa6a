pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod view;

pub mod uniffi_bindings;

pub use app::App;
pub use assets::{AssetBundle, ImageAsset, BUNDLED_RECIPES};
pub use crate::config::{load_config, AppConfig};
pub use error::LoadError;
pub use loader::{decode_recipes, load_recipes, try_load_recipes};
pub use model::{Ingredient, Recipe, Step};
pub use navigation::{Action, Screen};
pub use view::{render, render_detail, render_list, render_step, View};

// Re-export UniFFI bindings
pub use uniffi_bindings::*;

/// Load the recipes compiled into the binary.
///
/// # Example
/// ```
/// let recipes = delicious_notes::load_bundled_recipes();
/// assert!(!recipes.is_empty());
/// ```
pub fn load_bundled_recipes() -> Vec<Recipe> {
    load_recipes(&AssetBundle::Embedded, &AppConfig::default())
}
