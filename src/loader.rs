use std::collections::HashSet;

use log::{debug, error, warn};

use crate::{AppConfig, AssetBundle, LoadError, Recipe};

/// Decode a JSON array of recipes, preserving source order.
pub fn decode_recipes(bytes: &[u8]) -> Result<Vec<Recipe>, LoadError> {
    let recipes: Vec<Recipe> = serde_json::from_slice(bytes)?;
    Ok(recipes)
}

/// Locate and decode the recipe resource, surfacing any failure.
pub fn try_load_recipes(bundle: &AssetBundle, config: &AppConfig) -> Result<Vec<Recipe>, LoadError> {
    let bytes = bundle.resource(&config.resource_name, &config.resource_extension)?;
    let recipes = decode_recipes(&bytes)?;

    debug!("{:#?}", recipes);
    report_duplicate_names(&recipes);

    Ok(recipes)
}

/// Load the recipe collection for the session.
///
/// A missing resource or a document that does not decode yields an empty
/// collection; the cause is logged and never returned to the caller.
pub fn load_recipes(bundle: &AssetBundle, config: &AppConfig) -> Vec<Recipe> {
    match try_load_recipes(bundle, config) {
        Ok(recipes) => recipes,
        Err(LoadError::Decode(e)) => {
            error!("Error decoding JSON: {}", e);
            Vec::new()
        }
        Err(e) => {
            error!("Could not load recipes: {}", e);
            Vec::new()
        }
    }
}

// The list keys rows by name; duplicates are kept but noted.
fn report_duplicate_names(recipes: &[Recipe]) {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.name.as_str()) {
            warn!("Duplicate recipe name: {}", recipe.name);
        }
    }
}
